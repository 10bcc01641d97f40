//! Deferred image loading.
//!
//! Images carrying a `data-src` attribute keep a placeholder `src` until
//! they approach the viewport. Each one is observed, and on first becoming
//! visible the real source is preloaded off-DOM and swapped in; a preload
//! failure marks the element with the error class and leaves the original
//! `src` untouched. Per image the states run
//! `pending → observing → loading → {loaded | error}` and never re-enter.

use log::{debug, error, info, warn};

use crate::dom::Document;
use crate::source::ContentSource;
use crate::viewport::{IntersectionObserver, ObserverOptions, RootMargin, Viewport};

#[derive(Debug, Clone)]
pub struct LazyLoadOptions {
    pub root_margin: RootMargin,
    pub threshold: f64,
    pub loading_class: String,
    pub loaded_class: String,
    pub error_class: String,
}

impl Default for LazyLoadOptions {
    fn default() -> Self {
        LazyLoadOptions {
            root_margin: RootMargin {
                top: 50.0,
                bottom: 50.0,
            },
            threshold: 0.01,
            loading_class: "lazy-loading".to_string(),
            loaded_class: "lazy-loaded".to_string(),
            error_class: "lazy-error".to_string(),
        }
    }
}

pub struct LazyImageLoader {
    options: LazyLoadOptions,
    observer: Option<IntersectionObserver>,
}

impl LazyImageLoader {
    pub fn new(options: LazyLoadOptions) -> Self {
        let observer = IntersectionObserver::new(ObserverOptions {
            root_margin: options.root_margin,
            threshold: options.threshold,
        });
        LazyImageLoader {
            options,
            observer: Some(observer),
        }
    }

    /// Runtime without viewport observation: every deferred image resolves
    /// immediately on `init`, no observation, no preload.
    pub fn eager(options: LazyLoadOptions) -> Self {
        LazyImageLoader {
            options,
            observer: None,
        }
    }

    /// Discover deferred images and register them for observation. Images
    /// using native deferred loading (`loading="lazy"`) are left alone.
    pub fn init(&mut self, doc: &mut Document) {
        match self.observer.as_mut() {
            None => {
                warn!("viewport observation unavailable, loading all images immediately");
                load_all_now(doc);
            }
            Some(observer) => {
                for id in deferred_image_ids(doc) {
                    observer.observe(&id);
                }
                info!("observing {} deferred images", observer.observed_count());
            }
        }
    }

    /// Process visibility changes for the current viewport. Every image
    /// that became visible is unsubscribed first, so it resolves at most
    /// once no matter how the viewport moves afterwards.
    pub fn pump(&mut self, doc: &mut Document, viewport: &Viewport, source: &dyn ContentSource) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        for entry in observer.deliver(doc, viewport) {
            if !entry.is_intersecting {
                continue;
            }
            observer.unobserve(&entry.target);
            load_image(&self.options, doc, &entry.target, source);
        }
    }

    /// Stop all observation. Safe to call multiple times.
    pub fn destroy(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.disconnect();
        }
    }
}

/// Ids of `img` elements with a deferred source, skipping ones the runtime
/// already handles natively.
fn deferred_image_ids(doc: &Document) -> Vec<String> {
    doc.ids_with_tag("img")
        .into_iter()
        .filter(|id| {
            let Some(img) = doc.get(id) else { return false };
            img.attr("data-src").is_some() && img.attr("loading") != Some("lazy")
        })
        .collect()
}

fn load_image(options: &LazyLoadOptions, doc: &mut Document, id: &str, source: &dyn ContentSource) {
    let Some(img) = doc.get_mut(id) else { return };
    let Some(src) = img.attr("data-src").map(str::to_string) else {
        return;
    };
    let srcset = img.attr("data-srcset").map(str::to_string);

    img.add_class(&options.loading_class);

    // Preload off-DOM: the visible element only changes once the bytes
    // actually resolve.
    match source.fetch_raw(&src) {
        Ok(_) => {
            img.set_attr("src", &src);
            if let Some(srcset) = &srcset {
                img.set_attr("srcset", srcset);
            }
            img.remove_class(&options.loading_class);
            img.add_class(&options.loaded_class);
            img.remove_attr("data-src");
            img.remove_attr("data-srcset");
            debug!("image loaded: {}", src);
        }
        Err(e) => {
            img.remove_class(&options.loading_class);
            img.add_class(&options.error_class);
            error!("failed to load image {}: {}", src, e);
        }
    }
}

/// Degraded path: swap every deferred source in directly.
fn load_all_now(doc: &mut Document) {
    for id in doc.ids_with_tag("img") {
        let Some(img) = doc.get_mut(&id) else { continue };
        if let Some(src) = img.attr("data-src").map(str::to_string) {
            img.set_attr("src", &src);
            img.remove_attr("data-src");
        }
        if let Some(srcset) = img.attr("data-srcset").map(str::to_string) {
            img.set_attr("srcset", &srcset);
            img.remove_attr("data-srcset");
        }
    }
}
