//! Theme controller: the single writer of theme state.
//!
//! Every mutation re-derives the style variables, pushes them through the
//! [`StyleSink`], and writes the preference through to the store. Storage
//! failures are logged and swallowed.

use tracing::{debug, info, warn};

use crate::prefs::{PreferenceStore, ThemePreference};
use crate::style::{AppliedStyle, StyleSink};
use crate::theme::{ThemeId, ThemeRegistry, ThemeTokens};

/// Read-only snapshot handed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub theme_id: ThemeId,
    pub is_dark_mode: bool,
    pub tokens: &'static ThemeTokens,
}

/// Owns the current theme preference and applies it.
///
/// The applied token bundle is selected by the dark-mode flag. Choosing the
/// `dark` or `light` theme also sets the flag to match.
pub struct ThemeController<P, S> {
    store: P,
    sink: S,
    theme_id: ThemeId,
    dark_mode: bool,
}

impl<P: PreferenceStore, S: StyleSink> ThemeController<P, S> {
    /// Creates a controller holding the default preference. Nothing is
    /// read or applied until [`initialize`](Self::initialize).
    pub fn new(store: P, sink: S) -> Self {
        let pref = ThemePreference::default();
        Self {
            store,
            sink,
            theme_id: pref.theme,
            dark_mode: pref.dark_mode,
        }
    }

    /// Loads the persisted preference and applies it immediately.
    pub fn initialize(&mut self) {
        let pref = ThemePreference::load(&self.store);
        self.theme_id = pref.theme;
        self.dark_mode = pref.dark_mode;
        info!(theme = %self.theme_id, dark_mode = self.dark_mode, "Theme initialized");
        self.apply();
    }

    /// Switches to the theme registered under `key`.
    ///
    /// Unknown keys are ignored and return `false`.
    pub fn change_theme(&mut self, key: &str) -> bool {
        let Some(id) = ThemeRegistry::lookup(key) else {
            debug!(key, "Ignoring unknown theme");
            return false;
        };
        self.theme_id = id;
        self.dark_mode = id.is_dark();
        info!(theme = %id, "Theme changed");
        self.commit();
        true
    }

    /// Flips the dark-mode flag and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        info!(dark_mode = self.dark_mode, "Dark mode toggled");
        self.commit();
        self.dark_mode
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            theme_id: self.theme_id,
            is_dark_mode: self.dark_mode,
            tokens: self.tokens(),
        }
    }

    pub fn theme_id(&self) -> ThemeId {
        self.theme_id
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// The token bundle currently applied.
    pub fn tokens(&self) -> &'static ThemeTokens {
        ThemeRegistry::get(ThemeId::for_mode(self.dark_mode))
    }

    /// The style derived from the current state.
    pub fn applied(&self) -> AppliedStyle {
        AppliedStyle::new(self.tokens(), self.dark_mode)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    fn commit(&mut self) {
        self.apply();
        let pref = ThemePreference {
            theme: self.theme_id,
            dark_mode: self.dark_mode,
        };
        if let Err(e) = pref.save(&mut self.store) {
            warn!(error = %e, "Failed to persist theme preference");
        }
    }

    fn apply(&mut self) {
        let style = self.applied();
        self.sink.apply(&style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{MemoryStore, DARK_MODE_KEY, THEME_KEY};
    use crate::style::DetachedStyle;

    fn controller() -> ThemeController<MemoryStore, DetachedStyle> {
        let mut c = ThemeController::new(MemoryStore::new(), DetachedStyle::default());
        c.initialize();
        c
    }

    #[test]
    fn test_initialize_applies_default() {
        let c = controller();
        assert_eq!(c.theme_id(), ThemeId::Dark);
        assert!(c.is_dark_mode());
        assert_eq!(c.sink().applications, 1);
        assert_eq!(c.sink().last.as_ref(), Some(&c.applied()));
        // Initialization only reads.
        assert!(c.store().is_empty());
    }

    #[test]
    fn test_change_theme_sets_mode_and_persists() {
        let mut c = controller();
        assert!(c.change_theme("light"));
        assert_eq!(c.theme_id(), ThemeId::Light);
        assert!(!c.is_dark_mode());
        assert_eq!(c.tokens().name, "Bright Mode");
        assert_eq!(c.store().get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(c.store().get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
        assert!(c.sink().last.as_ref().unwrap().light_mode);
    }

    #[test]
    fn test_toggle_only_flips_flag() {
        let mut c = controller();
        assert!(!c.toggle_dark_mode());
        assert_eq!(c.theme_id(), ThemeId::Dark);
        assert_eq!(c.state().tokens.name, "Bright Mode");
        assert_eq!(c.sink().applications, 2);
    }
}
