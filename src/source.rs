use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::errors::LoadError;

/// Unified content access. Every JSON document and deferred image the page
/// needs comes through here. Implementations: `DirSource` (static files on
/// disk) and `HttpSource` (plain GET against a base URL).
pub trait ContentSource: Send + Sync {
    /// Fetch the raw bytes at a relative path. A path that does not resolve
    /// to a successful response fails with `LoadError::Fetch`.
    fn fetch_raw(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// Fetch and decode a JSON document. A body that is not valid JSON
    /// fails with `LoadError::Parse`.
    fn fetch_json(&self, path: &str) -> Result<Value, LoadError> {
        let bytes = self.fetch_raw(path)?;
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Content rooted at a directory on disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirSource { root: root.into() }
    }
}

impl ContentSource for DirSource {
    fn fetch_raw(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        fs::read(self.root.join(path)).map_err(|e| LoadError::Fetch {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Content served over HTTP from a fixed base URL.
pub struct HttpSource {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: Url) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;
        Ok(HttpSource { base, client })
    }
}

impl ContentSource for HttpSource {
    fn fetch_raw(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let fetch_err = |reason: String| LoadError::Fetch {
            path: path.to_string(),
            reason,
        };

        let url = self
            .base
            .join(path)
            .map_err(|e| fetch_err(e.to_string()))?;
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(fetch_err(format!("HTTP {}", resp.status())));
        }
        let bytes = resp.bytes().map_err(|e| fetch_err(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
