use serde_json::Value;

use super::req_str;
use crate::errors::LoadError;
use crate::render::html_escape;

/// One blog card: title, summary, and a Read More link.
pub fn render_article(article: &Value, data_path: &str) -> Result<String, LoadError> {
    let title = req_str(article, "title", data_path)?;
    let summary = req_str(article, "summary", data_path)?;
    let url = req_str(article, "url", data_path)?;
    Ok(format!(
        "<article class=\"blog-card\">\
         <h3>{}</h3>\
         <p>{}</p>\
         <a href=\"{}\" class=\"project-link\">Read More</a>\
         </article>",
        html_escape(title),
        html_escape(summary),
        html_escape(url),
    ))
}
