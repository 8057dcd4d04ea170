use std::collections::BTreeSet;

use tracing::debug;

use crate::reveal::{
    IntersectionEntry, RevealConfig, RevealMode, RevealState, SectionId, VisibilityObserver,
};

/// Drives the Hidden → Visible transition of every attached target.
///
/// One controller lives for one rendered portfolio. Disposing it (explicitly or by drop)
/// disconnects the observer so no callback can fire against a stale page.
pub struct RevealController<O: VisibilityObserver> {
    observer: O,
    config: RevealConfig,
    state: RevealState,
    watching: BTreeSet<SectionId>,
    disposed: bool,
}

impl<O: VisibilityObserver> RevealController<O> {
    pub fn new(observer: O, config: RevealConfig) -> Self {
        Self {
            observer,
            config,
            state: RevealState::default(),
            watching: BTreeSet::new(),
            disposed: false,
        }
    }

    /// Starts observing `targets`. Already-visible or already-watched targets are skipped.
    pub fn attach(&mut self, targets: impl IntoIterator<Item = SectionId>) {
        if self.disposed {
            return;
        }
        for target in targets {
            if self.state.is_visible(&target) || self.watching.contains(&target) {
                continue;
            }
            self.observer.observe(&target, &self.config);
            self.watching.insert(target);
        }
    }

    /// Applies a batch of observations and returns the targets revealed by it, in entry order.
    pub fn handle(&mut self, entries: &[IntersectionEntry]) -> Vec<SectionId> {
        if self.disposed {
            return Vec::new();
        }

        let mut revealed = Vec::new();
        for entry in entries {
            if !self.watching.contains(&entry.target) {
                continue;
            }
            if !entry.is_intersecting() || entry.ratio < self.config.threshold {
                continue;
            }
            if self.state.mark_visible(entry.target.clone()) {
                revealed.push(entry.target.clone());
            }
            if self.config.mode == RevealMode::OneShot {
                self.observer.unobserve(&entry.target);
                self.watching.remove(&entry.target);
            }
        }

        if !revealed.is_empty() {
            debug!("Revealed {} section(s)", revealed.len());
        }
        revealed
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// Targets still under observation.
    pub fn watching(&self) -> impl Iterator<Item = &SectionId> {
        self.watching.iter()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Disconnects all observation. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.observer.disconnect();
        self.watching.clear();
        self.disposed = true;
    }
}

impl<O: VisibilityObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}
