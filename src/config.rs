use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

/// Site configuration read from `folio.toml`. Every key has a default so a
/// missing file still yields a runnable setup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the JSON content tree (used when `base_url` is unset).
    pub content_dir: String,
    /// Where the rendered page is written.
    pub output: String,
    /// Persisted preferences (theme) live here.
    pub prefs_file: String,
    /// Fetch content over HTTP from this base URL instead of `content_dir`.
    pub base_url: Option<String>,
    /// Simulated viewport height in px.
    pub viewport_height: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_dir: "content".to_string(),
            output: "site/index.html".to_string(),
            prefs_file: "folio-prefs.json".to_string(),
            base_url: None,
            viewport_height: 900.0,
        }
    }
}

impl SiteConfig {
    /// Load the config file, falling back to defaults when it is absent.
    /// A present-but-invalid file is an error; silently ignoring it would
    /// render the wrong site.
    pub fn load(path: &str) -> Result<SiteConfig, String> {
        if !Path::new(path).exists() {
            warn!("{} not found, using default configuration", path);
            return Ok(SiteConfig::default());
        }
        let text = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
        toml::from_str(&text).map_err(|e| format!("invalid {}: {}", path, e))
    }
}
