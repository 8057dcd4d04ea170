// Theme: light/dark mode for the one pack that offers a toggle, plus the theme packs
// (style token sets) the renderer is parameterized by.

pub mod packs;
pub mod store;

use std::str::FromStr;

use tracing::warn;

pub use packs::{ThemePack, ThemePackName};
pub use store::{CookieStore, KeyValueStore};

/// Fixed key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "onelink-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(()),
        }
    }
}

/// Owns the theme value for one mounted view.
///
/// The persisted value is read once, at mount. Every toggle writes it back; write failures
/// are logged and otherwise ignored.
pub struct ThemeController<S: KeyValueStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn mount(store: S) -> Self {
        let mode = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_default(),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                warn!("Could not read theme preference: {e}");
                ThemeMode::default()
            }
        };
        Self { store, mode }
    }

    pub fn theme(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, self.mode.as_str()) {
            warn!("Could not persist theme preference: {e}");
        }
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::store::MemoryStore;

    #[test]
    fn test_defaults_to_dark() {
        let controller = ThemeController::mount(MemoryStore::new());
        assert_eq!(controller.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_unknown_persisted_value_reads_as_default() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(ThemeController::mount(store).theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_double_toggle_restores_persisted_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light").unwrap();

        let mut controller = ThemeController::mount(store);
        controller.toggle();
        controller.toggle();

        let store = controller.into_store();
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_fresh_mount_reads_last_persisted_value() {
        let mut controller = ThemeController::mount(MemoryStore::new());
        assert_eq!(controller.toggle(), ThemeMode::Light);

        let remounted = ThemeController::mount(controller.into_store());
        assert_eq!(remounted.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let mut controller = ThemeController::mount(MemoryStore::unavailable());
        assert_eq!(controller.theme(), ThemeMode::Dark);
        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(controller.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Light".parse::<ThemeMode>().is_err());
    }
}
