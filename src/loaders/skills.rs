use serde_json::Value;

use super::req_str;
use crate::errors::LoadError;
use crate::render::html_escape;

/// One skill panel: the category header (icon + title) from the config,
/// the list items from the category's data file (an array of `{name}`).
pub fn render_category(
    category: &Value,
    skills: &Value,
    data_path: &str,
) -> Result<String, LoadError> {
    let icon = req_str(category, "icon", data_path)?;
    let icon_alt = req_str(category, "iconAlt", data_path)?;
    let title = req_str(category, "title", data_path)?;

    let records = skills.as_array().ok_or_else(|| LoadError::MissingField {
        path: data_path.to_string(),
        field: "skills".to_string(),
    })?;

    let mut items = String::new();
    for skill in records {
        let name = req_str(skill, "name", data_path)?;
        items.push_str(&format!("<li>{}</li>", html_escape(name)));
    }

    Ok(format!(
        "<article class=\"skill-panel\">\
         <header class=\"skill-panel-header\">\
         <img src=\"{}\" alt=\"{}\" class=\"skill-icon\">\
         <h3>{}</h3>\
         </header>\
         <ul class=\"skill-list\">{}</ul>\
         </article>",
        html_escape(icon),
        html_escape(icon_alt),
        html_escape(title),
        items,
    ))
}
