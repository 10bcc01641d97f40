//! Viewport geometry and the intersection subscription.
//!
//! The browser's callback-style observer is reframed as an explicit
//! contract: an [`IntersectionObserver`] holds a set of subscribed element
//! ids, and each call to [`IntersectionObserver::deliver`] reports the
//! elements whose visibility changed since the previous delivery. Every
//! crossing is therefore handled exactly once; consumers that want
//! fire-at-most-once semantics unsubscribe the element on first delivery.

use std::collections::HashMap;

use crate::dom::Document;

/// The visible band of the page, in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Viewport {
            scroll_y: 0.0,
            height,
        }
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }
}

/// Pixel margins applied to the viewport band before testing intersection.
/// Positive values grow the band, negative values shrink it, matching the
/// rootMargin convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverOptions {
    pub root_margin: RootMargin,
    /// Fraction of the element that must overlap the band to count as
    /// intersecting. Zero means any overlap.
    pub threshold: f64,
}

/// One visibility change for one subscribed element.
#[derive(Debug, Clone)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub struct IntersectionObserver {
    options: ObserverOptions,
    observed: Vec<String>,
    last_state: HashMap<String, bool>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        IntersectionObserver {
            options,
            observed: Vec::new(),
            last_state: HashMap::new(),
        }
    }

    /// Subscribe an element. Initial state is not-intersecting, so an
    /// element already inside the band produces an entry on the next
    /// delivery. Re-observing an element is a no-op.
    pub fn observe(&mut self, id: &str) {
        if !self.observed.iter().any(|o| o == id) {
            self.observed.push(id.to_string());
        }
    }

    pub fn unobserve(&mut self, id: &str) {
        self.observed.retain(|o| o != id);
        self.last_state.remove(id);
    }

    /// Drop every subscription. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.last_state.clear();
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.observed.iter().any(|o| o == id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Compute visibility for every subscribed element against the current
    /// viewport and return entries for the ones whose state changed.
    /// Entries come back in subscription order.
    pub fn deliver(&mut self, doc: &Document, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let band_top = viewport.scroll_y - self.options.root_margin.top;
        let band_bottom = viewport.scroll_y + viewport.height + self.options.root_margin.bottom;

        let mut entries = Vec::new();
        for id in &self.observed {
            let Some(element) = doc.get(id) else { continue };

            let ratio = if element.height > 0.0 {
                let overlap = (element.top + element.height).min(band_bottom)
                    - element.top.max(band_top);
                (overlap.max(0.0) / element.height).min(1.0)
            } else if element.top >= band_top && element.top <= band_bottom {
                1.0
            } else {
                0.0
            };

            let intersecting = if self.options.threshold > 0.0 {
                ratio >= self.options.threshold
            } else {
                ratio > 0.0
            };

            let previous = self.last_state.insert(id.clone(), intersecting);
            if previous.unwrap_or(false) != intersecting {
                entries.push(IntersectionEntry {
                    target: id.clone(),
                    is_intersecting: intersecting,
                    ratio,
                });
            }
        }
        entries
    }
}
