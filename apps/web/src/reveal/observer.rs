use std::collections::{BTreeMap, BTreeSet};

use crate::reveal::{IntersectionEntry, RevealConfig, RootMargin, SectionId};

/// Source of intersection observations for a `RevealController`.
///
/// Mirrors the browser `IntersectionObserver` surface the controller needs.
pub trait VisibilityObserver {
    fn observe(&mut self, target: &SectionId, config: &RevealConfig);
    fn unobserve(&mut self, target: &SectionId);
    /// Stops all observation. No entries may be produced afterwards.
    fn disconnect(&mut self);
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometric observer: computes intersection ratios of laid-out elements against a
/// scrolled viewport whose bottom edge is shrunk by the configured root margin.
#[derive(Debug)]
pub struct ViewportObserver {
    viewport_height: f64,
    scroll_y: f64,
    root_margin: RootMargin,
    layout: BTreeMap<SectionId, Rect>,
    observed: BTreeSet<SectionId>,
    disconnected: bool,
}

impl ViewportObserver {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_y: 0.0,
            root_margin: RootMargin::Pixels(0.0),
            layout: BTreeMap::new(),
            observed: BTreeSet::new(),
            disconnected: false,
        }
    }

    /// Records where `target` sits on the page.
    pub fn place(&mut self, target: SectionId, rect: Rect) {
        self.layout.insert(target, rect);
    }

    /// Scrolls to `scroll_y` and reports every observed, laid-out element.
    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<IntersectionEntry> {
        self.scroll_y = scroll_y.max(0.0);
        if self.disconnected {
            return Vec::new();
        }

        let root_top = self.scroll_y;
        let root_bottom = root_top + self.root_margin.effective_height(self.viewport_height);

        self.observed
            .iter()
            .filter_map(|target| {
                let rect = self.layout.get(target)?;
                Some(IntersectionEntry {
                    target: target.clone(),
                    ratio: intersection_ratio(rect, root_top, root_bottom),
                })
            })
            .collect()
    }

    pub fn is_observing(&self, target: &SectionId) -> bool {
        self.observed.contains(target)
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&mut self, target: &SectionId, config: &RevealConfig) {
        if self.disconnected {
            return;
        }
        self.root_margin = config.root_margin;
        self.observed.insert(target.clone());
    }

    fn unobserve(&mut self, target: &SectionId) {
        self.observed.remove(target);
    }

    fn disconnect(&mut self) {
        self.observed.clear();
        self.disconnected = true;
    }
}

/// Visible fraction of `rect` within `[root_top, root_bottom)`.
fn intersection_ratio(rect: &Rect, root_top: f64, root_bottom: f64) -> f64 {
    if rect.height <= 0.0 {
        // Zero-height elements count as fully visible when inside the root.
        return if rect.top >= root_top && rect.top < root_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = rect.bottom().min(root_bottom) - rect.top.max(root_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}
