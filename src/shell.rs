//! The structural stand-in for the static HTML shell: a navbar with anchor
//! links and the theme toggle, one section per content area wrapping its
//! container, and a deferred profile image. The real shell ships its own
//! CSS; here only ids, classes, and vertical geometry matter.

use crate::dom::{Document, Element};
use crate::loaders::Section;
use crate::page::THEME_TOGGLE_ID;

const NAV_HEIGHT: f64 = 60.0;
const SECTION_HEIGHT: f64 = 600.0;

pub fn build_document() -> Document {
    let mut doc = Document::new();

    doc.push(
        Element::new("nav", "navbar")
            .with_class("navbar")
            .with_box(0.0, NAV_HEIGHT),
    );

    for section in Section::all() {
        doc.push(
            Element::new("a", &format!("nav-{}", section.name()))
                .with_parent("navbar")
                .with_attr("href", &format!("#{}", section.name())),
        );
    }
    doc.push(
        Element::new("button", THEME_TOGGLE_ID)
            .with_parent("navbar")
            .with_attr("aria-label", "Toggle theme"),
    );

    for (index, section) in Section::all().iter().enumerate() {
        let top = NAV_HEIGHT + 40.0 + index as f64 * SECTION_HEIGHT;
        doc.push(
            Element::new("section", section.name())
                .with_class("section")
                .with_box(top, SECTION_HEIGHT - 40.0),
        );
        doc.push(
            Element::new("div", section.container_id())
                .with_parent(section.name())
                .with_box(top, SECTION_HEIGHT - 40.0),
        );
    }

    // Deferred profile photo inside the about section.
    doc.push(
        Element::new("img", "profile-photo")
            .with_parent("about")
            .with_attr("data-src", "about/profile.jpg")
            .with_attr("alt", "Profile photo")
            .with_box(NAV_HEIGHT + 80.0, 200.0),
    );

    let footer_top = NAV_HEIGHT + 40.0 + Section::all().len() as f64 * SECTION_HEIGHT;
    doc.push(
        Element::new("footer", "footer")
            .with_class("footer")
            .with_box(footer_top, 120.0),
    );

    doc
}
