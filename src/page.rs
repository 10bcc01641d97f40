//! Page-wide behaviors independent of content loading: theme persistence,
//! smooth anchor scrolling, the mailto contact handler, scroll-in reveal,
//! and active-nav-link highlighting. Each behavior is independent and safe
//! to re-attach; none of them shares state with the content loaders.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};

use crate::dom::Document;
use crate::prefs::Prefs;
use crate::render::percent_encode;
use crate::viewport::{IntersectionObserver, ObserverOptions, RootMargin, Viewport};

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
const THEME_KEY: &str = "theme";
const SUN: &str = "\u{2600}\u{fe0f}";
const MOON: &str = "\u{1f319}";

/// Base64-obfuscated fallback recipient, used when the contact form carries
/// no `data-recipient` attribute. Obfuscation keeps the address out of
/// plain-text scrapes of the page source.
const FALLBACK_RECIPIENT_B64: &str = "a2lyYW43MDI4QGdtYWlsLmNvbQ==";

/// Classes whose elements animate in on first viewport entry.
const REVEAL_CLASSES: &[&str] = &[
    "section",
    "project-card",
    "skill-panel",
    "blog-card",
    "article-card",
];

const REVEAL_HIDDEN_STYLE: &str =
    "opacity:0;transform:translateY(30px);transition:opacity 0.6s ease-out, transform 0.6s ease-out";

/// Trimmed contact form field values.
#[derive(Debug, Clone, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct PageController {
    prefs: Prefs,
    /// The visible URL fragment, updated by smooth scrolling in place of a
    /// full navigation.
    pub fragment: String,
    reveal: IntersectionObserver,
    nav: IntersectionObserver,
}

impl PageController {
    /// The nav band is fixed relative to the viewport: 100px off the top,
    /// the bottom two thirds ignored, threshold 0.3. The reveal band trims
    /// 50px off the bottom at threshold 0.1.
    pub fn new(prefs: Prefs, viewport: &Viewport) -> Self {
        PageController {
            prefs,
            fragment: String::new(),
            reveal: IntersectionObserver::new(ObserverOptions {
                root_margin: RootMargin {
                    top: 0.0,
                    bottom: -50.0,
                },
                threshold: 0.1,
            }),
            nav: IntersectionObserver::new(ObserverOptions {
                root_margin: RootMargin {
                    top: -100.0,
                    bottom: -0.66 * viewport.height,
                },
                threshold: 0.3,
            }),
        }
    }

    /// Wire everything up once the document exists: apply the persisted
    /// theme and subscribe the reveal and nav observers.
    pub fn init(&mut self, doc: &mut Document) {
        self.apply_theme(doc);
        self.init_reveal(doc);
        self.init_nav(doc);
    }

    // ── Theme ───────────────────────────────────────────

    /// Apply the persisted theme preference; the default is dark. Light
    /// adds the `light` class on the document root and shows the moon on
    /// the toggle, dark removes it and shows the sun.
    pub fn apply_theme(&self, doc: &mut Document) {
        let light = self.prefs.get_or(THEME_KEY, "dark") == "light";
        if light {
            doc.root_add_class("light");
        } else {
            doc.root_remove_class("light");
        }
        set_toggle_indicator(doc, light);
    }

    /// Flip the theme, update the indicator, persist the new choice.
    pub fn toggle_theme(&mut self, doc: &mut Document) -> Result<(), String> {
        let light = !doc.root_has_class("light");
        if light {
            doc.root_add_class("light");
        } else {
            doc.root_remove_class("light");
        }
        set_toggle_indicator(doc, light);
        self.prefs
            .set(THEME_KEY, if light { "light" } else { "dark" })
    }

    // ── Smooth scroll ───────────────────────────────────

    /// In-page anchor navigation: move the viewport to the target's top and
    /// record the fragment without a full navigation. Anything that is not
    /// an in-page anchor, or points at a missing element, is ignored.
    pub fn scroll_to_anchor(&mut self, doc: &Document, viewport: &mut Viewport, href: &str) {
        let Some(target_id) = href.strip_prefix('#') else {
            return;
        };
        if let Some(target) = doc.get(target_id) {
            viewport.scroll_to(target.top);
            self.fragment = href.to_string();
            debug!("scrolled to {}", href);
        }
    }

    // ── Contact form ────────────────────────────────────

    /// Fill the contact form's draft state.
    pub fn fill_contact_form(doc: &mut Document, name: &str, email: &str, message: &str) {
        if let Some(form) = doc.get_mut("contact-form") {
            form.set_attr("value-name", name);
            form.set_attr("value-email", email);
            form.set_attr("value-message", message);
        }
    }

    /// Intercept the contact submission: build a mailto deep link from the
    /// trimmed draft values and the form's recipient (falling back to the
    /// de-obfuscated constant), then clear the draft. Returns the href that
    /// would open the mail client, or `None` without a form.
    pub fn submit_contact(&self, doc: &mut Document) -> Option<String> {
        let form = doc.get_mut("contact-form")?;

        let submission = ContactSubmission {
            name: form.attr("value-name").unwrap_or("").trim().to_string(),
            email: form.attr("value-email").unwrap_or("").trim().to_string(),
            message: form.attr("value-message").unwrap_or("").trim().to_string(),
        };
        let recipient = form
            .attr("data-recipient")
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(fallback_recipient);

        form.remove_attr("value-name");
        form.remove_attr("value-email");
        form.remove_attr("value-message");

        let sent_at = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let href = build_mailto(&recipient, &submission, &sent_at);
        info!("opening mail client for {}", recipient);
        Some(href)
    }

    // ── Scroll reveal ───────────────────────────────────

    fn init_reveal(&mut self, doc: &mut Document) {
        let mut ids = Vec::new();
        for class in REVEAL_CLASSES {
            for id in doc.ids_with_class(class) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        for id in ids {
            if let Some(element) = doc.get_mut(&id) {
                element.set_attr("style", REVEAL_HIDDEN_STYLE);
            }
            self.reveal.observe(&id);
        }
    }

    /// Animate in every element that entered the viewport since the last
    /// pump, staggered by position in the batch, then stop observing it
    /// for good.
    pub fn pump_reveal(&mut self, doc: &mut Document, viewport: &Viewport) {
        let entries = self.reveal.deliver(doc, viewport);
        let mut index = 0usize;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            self.reveal.unobserve(&entry.target);
            if let Some(element) = doc.get_mut(&entry.target) {
                element.set_attr(
                    "style",
                    &format!(
                        "opacity:1;transform:translateY(0);transition:opacity 0.6s ease-out, \
                         transform 0.6s ease-out;transition-delay:{}ms",
                        index * 100
                    ),
                );
            }
            index += 1;
        }
    }

    // ── Active nav link ─────────────────────────────────

    fn init_nav(&mut self, doc: &Document) {
        for id in doc.ids_with_class("section") {
            self.nav.observe(&id);
        }
    }

    /// Highlight the nav link of the section crossing the nav band. When a
    /// batch reports several qualifying sections the topmost one wins, so
    /// the outcome never depends on delivery order.
    pub fn pump_nav(&mut self, doc: &mut Document, viewport: &Viewport) {
        let entries = self.nav.deliver(doc, viewport);
        let active = entries
            .iter()
            .filter(|e| e.is_intersecting)
            .min_by(|a, b| {
                let top = |e: &&crate::viewport::IntersectionEntry| {
                    doc.get(&e.target).map(|el| el.top).unwrap_or(f64::MAX)
                };
                top(a).total_cmp(&top(b))
            })
            .map(|e| e.target.clone());

        let Some(section_id) = active else { return };
        let target_href = format!("#{}", section_id);
        for link_id in doc.ids_with_tag("a") {
            let Some(link) = doc.get(&link_id) else { continue };
            let is_anchor = link.attr("href").is_some_and(|h| h.starts_with('#'));
            if !is_anchor {
                continue;
            }
            let matches = link.attr("href") == Some(target_href.as_str());
            if let Some(link) = doc.get_mut(&link_id) {
                if matches {
                    link.add_class("active");
                } else {
                    link.remove_class("active");
                }
            }
        }
    }

    // ── Blog category filter ────────────────────────────

    /// Chip click: mark the chip active and show only the article cards of
    /// its category; `all` shows everything.
    pub fn filter_articles(doc: &mut Document, category: &str) {
        for chip_id in doc.ids_with_class("chip") {
            let matches = doc
                .get(&chip_id)
                .and_then(|c| c.attr("data-category"))
                .is_some_and(|c| c == category);
            if let Some(chip) = doc.get_mut(&chip_id) {
                if matches {
                    chip.add_class("is-active");
                } else {
                    chip.remove_class("is-active");
                }
            }
        }
        for card_id in doc.ids_with_class("article-card") {
            let show = category == "all"
                || doc
                    .get(&card_id)
                    .and_then(|c| c.attr("data-category"))
                    .is_some_and(|c| c == category);
            if let Some(card) = doc.get_mut(&card_id) {
                if show {
                    card.remove_attr("hidden");
                } else {
                    card.set_attr("hidden", "hidden");
                }
            }
        }
    }
}

fn set_toggle_indicator(doc: &mut Document, light: bool) {
    if let Some(toggle) = doc.get_mut(THEME_TOGGLE_ID) {
        toggle.inner_html = if light { MOON } else { SUN }.to_string();
    }
}

fn fallback_recipient() -> String {
    STANDARD
        .decode(FALLBACK_RECIPIENT_B64)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Build the mail-client deep link. Pure, so the exact encoding is easy to
/// pin down in tests; the caller supplies the timestamp.
pub fn build_mailto(recipient: &str, submission: &ContactSubmission, sent_at: &str) -> String {
    let subject = format!(
        "Portfolio Contact: {}",
        if submission.name.is_empty() {
            "New Message"
        } else {
            &submission.name
        }
    );
    let body = [
        format!("Name: {}", submission.name),
        format!("Email: {}", submission.email),
        String::new(),
        "Message:".to_string(),
        submission.message.clone(),
        String::new(),
        format!("Sent from portfolio site on {}", sent_at),
    ]
    .join("\n");

    format!(
        "mailto:{}?subject={}&body={}",
        percent_encode(recipient),
        percent_encode(&subject),
        percent_encode(&body),
    )
}

/// Strip an `/index.html` suffix so the visible URL stays clean.
pub fn clean_url(url: &str) -> String {
    if url.contains("/index.html") {
        url.replacen("/index.html", "/", 1)
    } else {
        url.to_string()
    }
}
