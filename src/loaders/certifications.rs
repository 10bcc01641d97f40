use serde_json::Value;

use super::{opt_str, req_str};
use crate::errors::LoadError;
use crate::render::html_escape;

/// One certification panel: category header from the config, one entry per
/// record in the category's data file. Credential id and verify link are
/// optional and simply omitted when absent.
pub fn render_category(
    category: &Value,
    certifications: &Value,
    data_path: &str,
) -> Result<String, LoadError> {
    let icon = req_str(category, "icon", data_path)?;
    let icon_alt = req_str(category, "iconAlt", data_path)?;
    let title = req_str(category, "title", data_path)?;

    let records = certifications
        .as_array()
        .ok_or_else(|| LoadError::MissingField {
            path: data_path.to_string(),
            field: "certifications".to_string(),
        })?;

    let mut items = String::new();
    for cert in records {
        items.push_str(&render_entry(cert, data_path)?);
    }

    Ok(format!(
        "<article class=\"cert-panel\">\
         <header class=\"cert-panel-header\">\
         <img src=\"{}\" alt=\"{}\" class=\"cert-icon\">\
         <h3>{}</h3>\
         </header>\
         <div class=\"cert-list\">{}</div>\
         </article>",
        html_escape(icon),
        html_escape(icon_alt),
        html_escape(title),
        items,
    ))
}

fn render_entry(cert: &Value, data_path: &str) -> Result<String, LoadError> {
    let name = req_str(cert, "name", data_path)?;
    let issuer = req_str(cert, "issuer", data_path)?;
    let date = req_str(cert, "date", data_path)?;

    let credential = match opt_str(cert, "credentialId") {
        Some(id) => format!("<p class=\"cert-id\">ID: {}</p>", html_escape(id)),
        None => String::new(),
    };
    let verify = match opt_str(cert, "verifyUrl") {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"cert-verify\">Verify</a>",
            html_escape(url)
        ),
        None => String::new(),
    };

    Ok(format!(
        "<div class=\"cert-item\">\
         <h4>{}</h4>\
         <p class=\"cert-issuer\">{}</p>\
         <p class=\"cert-date\">{}</p>\
         {}{}\
         </div>",
        html_escape(name),
        html_escape(issuer),
        html_escape(date),
        credential,
        verify,
    ))
}
