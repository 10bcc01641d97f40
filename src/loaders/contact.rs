use serde_json::Value;

use super::{opt_str, req_array, req_str};
use crate::errors::LoadError;
use crate::render::html_escape;

/// The contact section: a mailto-backed form (action, method, and the
/// recipient carried on `data-recipient`), a collaboration blurb, and the
/// social link row from the second document.
pub fn render(config: &Value, social: &Value, path: &str) -> Result<String, LoadError> {
    let title = req_str(config, "sectionTitle", path)?;
    let message = req_str(config, "message", path)?;

    let form = config.get("form").ok_or_else(|| LoadError::MissingField {
        path: path.to_string(),
        field: "form".to_string(),
    })?;
    let action = req_str(form, "action", path)?;
    let method = req_str(form, "method", path)?;
    let recipient = req_str(form, "recipient", path)?;

    let mut social_html = String::new();
    for link in req_array(social, "links", "contact/social-links.json")? {
        social_html.push_str(&render_social_link(link)?);
    }

    Ok(format!(
        "<h2>{}</h2>\
         <form id=\"contact-form\" class=\"contact-form\" action=\"{}\" method=\"{}\" data-recipient=\"{}\">\
         <input type=\"text\" name=\"name\" placeholder=\"Your Name\" required>\
         <input type=\"email\" name=\"email\" placeholder=\"Your Email\" required>\
         <textarea name=\"message\" rows=\"5\" placeholder=\"Your Message\" required></textarea>\
         <button type=\"submit\" class=\"btn btn-primary\">Send</button>\
         </form>\
         <p class=\"collab\">{}</p>\
         <div class=\"social\">{}</div>",
        html_escape(title),
        html_escape(action),
        html_escape(method),
        html_escape(recipient),
        html_escape(message),
        social_html,
    ))
}

fn render_social_link(link: &Value) -> Result<String, LoadError> {
    let path = "contact/social-links.json";
    let url = req_str(link, "url", path)?;
    let label = req_str(link, "label", path)?;
    let aria = req_str(link, "ariaLabel", path)?;

    // Links with an icon (WhatsApp) get the inline icon treatment; plain
    // links get rel="noopener".
    Ok(match opt_str(link, "icon") {
        Some(icon) => {
            let color = opt_str(link, "iconColor").unwrap_or("inherit");
            format!(
                "<a href=\"{}\" target=\"_blank\" aria-label=\"{}\" class=\"project-link\" \
                 style=\"display:flex;align-items:center;gap:0.4rem;\">\
                 <i class=\"{}\" style=\"font-size:18px;color:{};\"></i>{}</a>",
                html_escape(url),
                html_escape(aria),
                html_escape(icon),
                html_escape(color),
                html_escape(label),
            )
        }
        None => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{}\" class=\"project-link\">{}</a>",
            html_escape(url),
            html_escape(aria),
            html_escape(label),
        ),
    })
}
