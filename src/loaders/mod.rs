//! The content-loading pipeline: one generic loader, six sections.
//!
//! Every section follows the same sequence: fetch the section's config
//! document, fetch each referenced data file (in parallel, results kept in
//! declared order), render each record through the section's pure template,
//! concatenate, and write the container exactly once. Any failure along the
//! chain aborts the whole section and writes the fixed fallback instead;
//! partial results are never shown.

use rayon::prelude::*;
use serde_json::Value;

use crate::dom::Document;
use crate::errors::LoadError;
use crate::render::fallback_markup;
use crate::source::ContentSource;

pub mod about;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod projects;
pub mod skills;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Certifications,
    Blog,
    Contact,
}

impl Section {
    pub fn all() -> [Section; 6] {
        [
            Section::About,
            Section::Skills,
            Section::Projects,
            Section::Certifications,
            Section::Blog,
            Section::Contact,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Id of the container element this section exclusively owns.
    pub fn container_id(&self) -> &'static str {
        match self {
            Section::About => "about-container",
            Section::Skills => "skills-container",
            Section::Projects => "projects-container",
            Section::Certifications => "certifications-container",
            Section::Blog => "blog-container",
            Section::Contact => "contact-container",
        }
    }

    /// Relative path of the section's config (or single data) document.
    pub fn config_path(&self) -> &'static str {
        match self {
            Section::About => "about/about-content.json",
            Section::Skills => "skills/skills-config.json",
            Section::Projects => "projects/projects-config.json",
            Section::Certifications => "certifications/certifications-config.json",
            Section::Blog => "blog/blog-data/blog-config.json",
            Section::Contact => "contact/contact-config.json",
        }
    }

    fn fallback_heading(&self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "Skills",
            Section::Projects => "DevOps Projects",
            Section::Certifications => "Certifications",
            Section::Blog => "Blog & Knowledge Sharing",
            Section::Contact => "Contact",
        }
    }

    fn fallback_message(&self) -> &'static str {
        match self {
            Section::About => "Unable to load content. Please try again later.",
            Section::Skills => "Unable to load skills. Please try again later.",
            Section::Projects => "Unable to load projects. Please try again later.",
            Section::Certifications => "Unable to load certifications. Please try again later.",
            Section::Blog => "Unable to load blog articles. Please try again later.",
            Section::Contact => "Unable to load contact information. Please try again later.",
        }
    }

    pub fn fallback(&self) -> String {
        fallback_markup(self.fallback_heading(), self.fallback_message())
    }
}

/// Drives one section from fetch to container write. Instances are
/// independent: each owns its container and shares nothing with the others.
pub struct ContentLoader<'a> {
    section: Section,
    source: &'a dyn ContentSource,
}

impl<'a> ContentLoader<'a> {
    pub fn new(section: Section, source: &'a dyn ContentSource) -> Self {
        ContentLoader { section, source }
    }

    /// Load, render, and assign the section. The container body is written
    /// exactly once per call: the full section markup on success, the fixed
    /// fallback on any failure. Errors go to the log and no further.
    pub fn init(&self, doc: &mut Document) {
        let html = match self.load() {
            Ok(html) => {
                log::info!("{} section rendered", self.section.name());
                html
            }
            Err(e) => {
                log::error!("error loading {} section: {}", self.section.name(), e);
                self.section.fallback()
            }
        };
        match doc.get_mut(self.section.container_id()) {
            Some(container) => container.inner_html = html,
            None => log::warn!(
                "container #{} not found, {} section skipped",
                self.section.container_id(),
                self.section.name()
            ),
        }
    }

    fn load(&self) -> Result<String, LoadError> {
        let path = self.section.config_path();
        let config = self.source.fetch_json(path)?;
        match self.section {
            Section::About => about::render(&config, path),
            Section::Skills => {
                let categories = req_array(&config, "categories", path)?;
                let panels = self.join_ordered(categories, path, skills::render_category)?;
                Ok(panels.concat())
            }
            Section::Certifications => {
                let categories = req_array(&config, "categories", path)?;
                let panels =
                    self.join_ordered(categories, path, certifications::render_category)?;
                Ok(format!(
                    "<h2>Certifications</h2><div class=\"certifications-grid\">{}</div>",
                    panels.concat()
                ))
            }
            Section::Projects => {
                let title = req_str(&config, "sectionTitle", path)?.to_string();
                let refs = req_array(&config, "projects", path)?;
                let cards = self.join_ordered(refs, path, |_, project, data_path| {
                    projects::render_project(project, data_path)
                })?;
                Ok(format!(
                    "<h2>{}</h2><div class=\"projects-grid\">{}</div>",
                    crate::render::html_escape(&title),
                    cards.concat()
                ))
            }
            Section::Blog => {
                let title = req_str(&config, "sectionTitle", path)?.to_string();
                let refs = req_array(&config, "articles", path)?;
                let cards = self.join_ordered(refs, path, |_, article, data_path| {
                    blog::render_article(article, data_path)
                })?;
                Ok(format!(
                    "<h2>{}</h2><div class=\"blog-list\">{}</div>",
                    crate::render::html_escape(&title),
                    cards.concat()
                ))
            }
            Section::Contact => {
                let social = self.source.fetch_json("contact/social-links.json")?;
                contact::render(&config, &social, path)
            }
        }
    }

    /// Fetch every sub-resource reference in parallel and render each with
    /// `render_one(reference, fetched_record, data_path)`. The join is
    /// all-or-nothing: one failure fails the lot, and results come back in
    /// the declared order regardless of completion order.
    fn join_ordered<F>(
        &self,
        refs: &[Value],
        config_path: &str,
        render_one: F,
    ) -> Result<Vec<String>, LoadError>
    where
        F: Fn(&Value, &Value, &str) -> Result<String, LoadError> + Send + Sync,
    {
        refs.par_iter()
            .map(|reference| {
                let data_path = req_str(reference, "dataFile", config_path)?;
                let record = self.source.fetch_json(data_path)?;
                render_one(reference, &record, data_path)
            })
            .collect()
    }
}

/// Required string field of a record; absence is a render-level failure
/// that routes to the section fallback like any other load error.
pub(crate) fn req_str<'v>(value: &'v Value, field: &str, path: &str) -> Result<&'v str, LoadError> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| LoadError::MissingField {
            path: path.to_string(),
            field: field.to_string(),
        })
}

/// Required array field of a record.
pub(crate) fn req_array<'v>(
    value: &'v Value,
    field: &str,
    path: &str,
) -> Result<&'v Vec<Value>, LoadError> {
    value
        .get(field)
        .and_then(|v| v.as_array())
        .ok_or_else(|| LoadError::MissingField {
            path: path.to_string(),
            field: field.to_string(),
        })
}

/// Optional string field: `None` when absent, empty, or not a string.
pub(crate) fn opt_str<'v>(value: &'v Value, field: &str) -> Option<&'v str> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
}
