//! Theme packs: named sets of style tokens and presentation switches.
//!
//! The renderer has one code path. Everything that differs between the tech, minimalist
//! and card looks of the profile page lives here as data.

use std::str::FromStr;

use thiserror::Error;

use crate::reveal::{RevealConfig, RevealMode, RootMargin};
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePackName {
    Tech,
    Minimal,
    Cards,
}

impl ThemePackName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePackName::Tech => "tech",
            ThemePackName::Minimal => "minimal",
            ThemePackName::Cards => "cards",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme pack '{0}'")]
pub struct UnknownThemePack(pub String);

impl FromStr for ThemePackName {
    type Err = UnknownThemePack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tech" => Ok(ThemePackName::Tech),
            "minimal" => Ok(ThemePackName::Minimal),
            "cards" => Ok(ThemePackName::Cards),
            other => Err(UnknownThemePack(other.to_string())),
        }
    }
}

/// Color tokens, emitted as CSS custom properties.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub fn css_variables(&self) -> String {
        format!(
            "--bg:{};--surface:{};--text:{};--muted:{};--accent:{};--accent-soft:{};--border:{};",
            self.background,
            self.surface,
            self.text,
            self.muted,
            self.accent,
            self.accent_soft,
            self.border
        )
    }
}

#[derive(Debug, Clone)]
pub struct ThemePack {
    pub name: ThemePackName,
    pub heading_font: &'static str,
    pub body_font: &'static str,
    /// Mode the pack is designed for, and the one used when it offers no toggle.
    pub base_mode: ThemeMode,
    /// Palette for `base_mode`.
    pub palette: Palette,
    /// Palette for the other mode; `None` when the pack cannot be toggled.
    pub alternate: Option<Palette>,
    pub reveal: RevealConfig,
    pub skill_stagger_cap: usize,
    pub project_stagger_cap: usize,
    pub timeline_stagger_cap: usize,
    /// Number of project cards shown before "show more"; `None` shows all.
    pub project_limit: Option<usize>,
    pub animated_grid: bool,
    pub cursor_glow: bool,
    pub skill_bars: bool,
    pub mobile_menu: bool,
}

impl ThemePack {
    pub fn named(name: ThemePackName) -> Self {
        match name {
            ThemePackName::Tech => tech(),
            ThemePackName::Minimal => minimal(),
            ThemePackName::Cards => cards(),
        }
    }

    pub fn supports_toggle(&self) -> bool {
        self.alternate.is_some()
    }

    /// Mode actually rendered, given the visitor's preference.
    pub fn resolve_mode(&self, preferred: ThemeMode) -> ThemeMode {
        if self.supports_toggle() {
            preferred
        } else {
            self.base_mode
        }
    }

    pub fn palette_for(&self, mode: ThemeMode) -> &Palette {
        match &self.alternate {
            Some(alternate) if mode != self.base_mode => alternate,
            _ => &self.palette,
        }
    }
}

fn tech() -> ThemePack {
    ThemePack {
        name: ThemePackName::Tech,
        heading_font: "'Orbitron', monospace",
        body_font: "'JetBrains Mono', monospace",
        palette: Palette {
            background: "#0a0e27",
            surface: "rgba(30, 27, 75, 0.55)",
            text: "#e0e7ff",
            muted: "#94a3b8",
            accent: "#818cf8",
            accent_soft: "rgba(99, 102, 241, 0.15)",
            border: "rgba(129, 140, 248, 0.3)",
        },
        alternate: None,
        base_mode: ThemeMode::Dark,
        reveal: RevealConfig {
            threshold: 0.1,
            root_margin: RootMargin::Pixels(-100.0),
            mode: RevealMode::OneShot,
        },
        skill_stagger_cap: 6,
        project_stagger_cap: 4,
        timeline_stagger_cap: 8,
        project_limit: None,
        animated_grid: true,
        cursor_glow: true,
        skill_bars: true,
        mobile_menu: false,
    }
}

fn minimal() -> ThemePack {
    ThemePack {
        name: ThemePackName::Minimal,
        heading_font: "'Inter', system-ui, sans-serif",
        body_font: "'Inter', system-ui, sans-serif",
        palette: Palette {
            background: "#0b0b0c",
            surface: "#141416",
            text: "#f4f4f5",
            muted: "#a1a1aa",
            accent: "#fafafa",
            accent_soft: "rgba(250, 250, 250, 0.06)",
            border: "#27272a",
        },
        alternate: Some(Palette {
            background: "#fafafa",
            surface: "#ffffff",
            text: "#18181b",
            muted: "#52525b",
            accent: "#09090b",
            accent_soft: "rgba(9, 9, 11, 0.05)",
            border: "#e4e4e7",
        }),
        base_mode: ThemeMode::Dark,
        reveal: RevealConfig {
            threshold: 0.15,
            root_margin: RootMargin::Percent(-10.0),
            mode: RevealMode::Sticky,
        },
        skill_stagger_cap: 8,
        project_stagger_cap: 6,
        timeline_stagger_cap: 6,
        project_limit: None,
        animated_grid: false,
        cursor_glow: false,
        skill_bars: false,
        mobile_menu: false,
    }
}

fn cards() -> ThemePack {
    ThemePack {
        name: ThemePackName::Cards,
        heading_font: "'Poppins', system-ui, sans-serif",
        body_font: "'Inter', system-ui, sans-serif",
        palette: Palette {
            background: "#f8fafc",
            surface: "#ffffff",
            text: "#0f172a",
            muted: "#64748b",
            accent: "#2563eb",
            accent_soft: "rgba(37, 99, 235, 0.08)",
            border: "#e2e8f0",
        },
        alternate: None,
        base_mode: ThemeMode::Light,
        reveal: RevealConfig {
            threshold: 0.1,
            root_margin: RootMargin::Percent(-10.0),
            mode: RevealMode::OneShot,
        },
        skill_stagger_cap: 8,
        project_stagger_cap: 6,
        timeline_stagger_cap: 6,
        project_limit: Some(6),
        animated_grid: false,
        cursor_glow: false,
        skill_bars: false,
        mobile_menu: true,
    }
}
