use folio_core::prefs::{DARK_MODE_KEY, THEME_KEY};
use folio_core::style::DetachedStyle;
use folio_core::*;
use tempfile::TempDir;

fn controller_over(store: MemoryStore) -> ThemeController<MemoryStore, DetachedStyle> {
    let mut controller = ThemeController::new(store, DetachedStyle::default());
    controller.initialize();
    controller
}

/// A store whose writes always fail.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Err(PrefsError::Unavailable("read-only".into()))
    }
}

// ----------------------------------------------------------------------------
// Registry membership
// ----------------------------------------------------------------------------

#[test]
fn test_unknown_theme_leaves_state_unchanged() {
    let mut controller = controller_over(MemoryStore::new());
    controller.change_theme("light");
    let before = controller.state();
    let applications = controller.sink().applications;

    for key in ["", "ocean", "Dark", "LIGHT", "sunset", " dark"] {
        assert!(!controller.change_theme(key), "{key:?} should be rejected");
    }

    assert_eq!(controller.state(), before);
    assert_eq!(controller.sink().applications, applications);
    assert_eq!(
        controller.store().get(THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn test_corrupted_preference_falls_back_to_default() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "neon-pink").unwrap();
    store.set(DARK_MODE_KEY, "{").unwrap();

    let controller = controller_over(store);
    assert_eq!(controller.theme_id(), ThemeId::Dark);
    assert!(controller.is_dark_mode());
    assert_eq!(controller.tokens().name, "Dark Mode");
}

// ----------------------------------------------------------------------------
// Style application
// ----------------------------------------------------------------------------

#[test]
fn test_double_toggle_restores_applied_style() {
    let mut controller = controller_over(MemoryStore::new());
    let original = controller.applied();

    controller.toggle_dark_mode();
    assert_ne!(controller.applied(), original);
    assert!(controller.sink().last.as_ref().unwrap().light_mode);

    controller.toggle_dark_mode();
    assert_eq!(controller.applied(), original);
    assert_eq!(controller.sink().last.as_ref(), Some(&original));
    assert_eq!(controller.sink().applications, 3);
}

#[test]
fn test_every_mutation_applies_the_derived_style() {
    let mut controller = controller_over(MemoryStore::new());
    controller.change_theme("light");
    assert_eq!(controller.sink().last.as_ref(), Some(&controller.applied()));
    controller.toggle_dark_mode();
    assert_eq!(controller.sink().last.as_ref(), Some(&controller.applied()));
    controller.change_theme("dark");
    assert_eq!(controller.sink().last.as_ref(), Some(&controller.applied()));
    assert_eq!(controller.sink().applications, 4);
}

// ----------------------------------------------------------------------------
// Persistence
// ----------------------------------------------------------------------------

#[test]
fn test_preference_survives_reload() {
    let store = MemoryStore::new();
    let mut first = controller_over(store.clone());
    first.change_theme("light");
    first.toggle_dark_mode();
    let expected = first.state();
    drop(first);

    let reloaded = controller_over(store);
    assert_eq!(reloaded.theme_id(), ThemeId::Light);
    assert!(reloaded.is_dark_mode());
    assert_eq!(reloaded.state(), expected);
}

#[test]
fn test_preference_survives_reload_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    let mut first = ThemeController::new(FileStore::open(&path), DetachedStyle::default());
    first.initialize();
    first.toggle_dark_mode();
    drop(first);

    let mut reloaded = ThemeController::new(FileStore::open(&path), DetachedStyle::default());
    reloaded.initialize();
    assert_eq!(reloaded.theme_id(), ThemeId::Dark);
    assert!(!reloaded.is_dark_mode());
    assert!(reloaded.sink().last.as_ref().unwrap().light_mode);
}

#[test]
fn test_store_failure_does_not_block_theme_change() {
    let mut controller = ThemeController::new(ReadOnlyStore::default(), DetachedStyle::default());
    controller.initialize();

    assert!(controller.change_theme("light"));
    assert_eq!(controller.theme_id(), ThemeId::Light);
    assert!(controller.sink().last.as_ref().unwrap().light_mode);
    assert!(controller.toggle_dark_mode());
    assert!(controller.store().inner.is_empty());
}
