use thiserror::Error;

/// Failure anywhere in a section's fetch/render chain. Every variant keeps
/// the path of the document that was being processed so the log line points
/// at the offending file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path did not resolve to a successful response / readable file.
    #[error("failed to load {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// The body was fetched but is not valid JSON.
    #[error("invalid JSON in {path}: {reason}")]
    Parse { path: String, reason: String },

    /// A record is missing a field the section template requires.
    #[error("missing field `{field}` in {path}")]
    MissingField { path: String, field: String },
}

impl LoadError {
    /// The path of the document that caused the failure.
    pub fn path(&self) -> &str {
        match self {
            LoadError::Fetch { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::MissingField { path, .. } => path,
        }
    }
}
