// Scroll-reveal: one-shot Hidden → Visible transitions for page sections.
// The controller is a plain state machine; what "visible" means geometrically is decided by
// whichever VisibilityObserver drives it (a viewport model in tests, the browser in production).

pub mod controller;
pub mod observer;
pub mod script;
pub mod stagger;

use std::collections::BTreeSet;

use serde::Serialize;

pub use controller::RevealController;
pub use observer::{VisibilityObserver, ViewportObserver};
pub use script::ScriptObserver;

/// Identifier of one reveal target, rendered as `data-reveal="…"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of targets already revealed. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    visible: BTreeSet<SectionId>,
}

impl RevealState {
    pub fn is_visible(&self, id: &SectionId) -> bool {
        self.visible.contains(id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionId> {
        self.visible.iter()
    }

    /// Returns `true` when `id` was not visible before.
    pub(crate) fn mark_visible(&mut self, id: SectionId) -> bool {
        self.visible.insert(id)
    }
}

/// Bottom-edge shrink of the observation root, as in a CSS `rootMargin` of
/// `0px 0px <bottom> 0px`. Negative values shrink the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootMargin {
    Pixels(f64),
    Percent(f64),
}

impl RootMargin {
    /// CSS form understood by `IntersectionObserver`.
    pub fn css(&self) -> String {
        match self {
            RootMargin::Pixels(px) => format!("0px 0px {px}px 0px"),
            RootMargin::Percent(pct) => format!("0px 0px {pct}% 0px"),
        }
    }

    /// Height of the observation root for a viewport of `viewport_height`.
    pub fn effective_height(&self, viewport_height: f64) -> f64 {
        let height = match self {
            RootMargin::Pixels(px) => viewport_height + px,
            RootMargin::Percent(pct) => viewport_height * (1.0 + pct / 100.0),
        };
        height.max(0.0)
    }
}

/// What happens to an element's observation once it has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Stop observing right after the first reveal.
    OneShot,
    /// Keep observing; the terminal Visible state prevents re-animation.
    Sticky,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Minimum intersection ratio (0.0–1.0) that triggers a reveal.
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub mode: RevealMode,
}

/// One observation delivered by a `VisibilityObserver`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    /// Visible fraction of the element inside the margin-adjusted root.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn is_intersecting(&self) -> bool {
        self.ratio > 0.0
    }
}
