use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::warn;

/// File-backed key/value preferences. The only consumer today is the theme
/// choice, but the API mirrors a settings table: `get`, `get_or`, `set`.
/// Reads happen once at construction; every `set` writes through to disk so
/// the value survives the next run.
pub struct Prefs {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl Prefs {
    /// Open the preferences file, starting empty if it is missing or
    /// unreadable. A corrupt file is not fatal; it is replaced wholesale on
    /// the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<HashMap<String, String>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!("ignoring corrupt preferences file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Prefs { path, values }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&self.values).map_err(|e| e.to_string())?;
        fs::write(&self.path, text).map_err(|e| e.to_string())
    }
}
