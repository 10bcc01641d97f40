use serde_json::Value;

use super::{req_array, req_str};
use crate::errors::LoadError;
use crate::render::html_escape;

/// One project card: title, technology list joined with " | ", description,
/// and a row of labelled links.
pub fn render_project(project: &Value, data_path: &str) -> Result<String, LoadError> {
    let title = req_str(project, "title", data_path)?;
    let description = req_str(project, "description", data_path)?;

    let technologies = req_array(project, "technologies", data_path)?;
    let tech: Vec<String> = technologies
        .iter()
        .filter_map(|t| t.as_str())
        .map(html_escape)
        .collect();

    let mut links = String::new();
    for link in req_array(project, "links", data_path)? {
        let url = req_str(link, "url", data_path)?;
        let label = req_str(link, "label", data_path)?;
        links.push_str(&format!(
            "<a href=\"{}\" class=\"project-link\">{}</a>",
            html_escape(url),
            html_escape(label),
        ));
    }

    Ok(format!(
        "<div class=\"project-card\">\
         <h3>{}</h3>\
         <p class=\"project-tech\">{}</p>\
         <p>{}</p>\
         <div class=\"project-links\">{}</div>\
         </div>",
        html_escape(title),
        tech.join(" | "),
        html_escape(description),
        links,
    ))
}
