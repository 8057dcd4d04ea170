use serde::Serialize;

use crate::reveal::{RevealConfig, RevealMode, SectionId, VisibilityObserver};

/// Observer that hands observation over to the visitor's browser.
///
/// It records what the controller asked for and serialises it into an inline script that
/// runs a native `IntersectionObserver` with the same threshold, margin and mode.
#[derive(Debug, Default)]
pub struct ScriptObserver {
    config: Option<RevealConfig>,
    targets: Vec<SectionId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfig<'a> {
    threshold: f64,
    root_margin: String,
    once: bool,
    targets: &'a [SectionId],
}

impl ScriptObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[SectionId] {
        &self.targets
    }

    /// Inline `<script>` body. Empty when nothing is observed.
    pub fn script(&self) -> String {
        let Some(config) = self.config.filter(|_| !self.targets.is_empty()) else {
            return String::new();
        };

        let payload = ScriptConfig {
            threshold: config.threshold,
            root_margin: config.root_margin.css(),
            once: config.mode == RevealMode::OneShot,
            targets: &self.targets,
        };
        // serde_json never fails on this shape; fall back to an inert config if it did.
        let json = serde_json::to_string(&payload).unwrap_or_else(|_| "{\"targets\":[]}".into());

        REVEAL_SCRIPT.replace("__CONFIG__", &json.replace('<', "\\u003c"))
    }
}

impl VisibilityObserver for ScriptObserver {
    fn observe(&mut self, target: &SectionId, config: &RevealConfig) {
        self.config = Some(*config);
        if !self.targets.contains(target) {
            self.targets.push(target.clone());
        }
    }

    fn unobserve(&mut self, target: &SectionId) {
        self.targets.retain(|t| t != target);
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }
}

const REVEAL_SCRIPT: &str = r#"(() => {
  const cfg = __CONFIG__;
  const wanted = new Set(cfg.targets);
  const nodes = Array.from(document.querySelectorAll("[data-reveal]"))
    .filter((el) => wanted.has(el.dataset.reveal));
  const reveal = (el) => el.classList.add("is-visible");
  if (!("IntersectionObserver" in window)) {
    nodes.forEach(reveal);
    return;
  }
  const observer = new IntersectionObserver((entries) => {
    for (const entry of entries) {
      if (entry.isIntersecting && entry.intersectionRatio >= cfg.threshold) {
        reveal(entry.target);
        if (cfg.once) observer.unobserve(entry.target);
      }
    }
  }, { threshold: cfg.threshold, rootMargin: cfg.rootMargin });
  nodes.forEach((el) => observer.observe(el));
  window.addEventListener("pagehide", () => observer.disconnect(), { once: true });
})();"#;
