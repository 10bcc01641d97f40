use serde_json::Value;

use super::req_str;
use crate::errors::LoadError;
use crate::render::html_escape;

/// About is the one section backed by a single document: a title and a
/// paragraph of content.
pub fn render(data: &Value, path: &str) -> Result<String, LoadError> {
    let title = req_str(data, "title", path)?;
    let content = req_str(data, "content", path)?;
    Ok(format!(
        "<h2>{}</h2><p>{}</p>",
        html_escape(title),
        html_escape(content)
    ))
}
