//! Theme persistence across store instances backed by redb
//!
//! Each "fresh initialization" opens a new `ThemeStore` over the same
//! database file, as a relaunched application would.

use std::sync::Arc;

use kinetic_core::{
    KeyValueStore, NoopApplier, PreferenceReader, RedbStore, StaticPreferences, Theme,
    ThemeSource, ThemeStore, THEME_STORAGE_KEY,
};
use tempfile::TempDir;

/// Fails the test if the system preference is consulted
struct UnreachablePreferences;

impl PreferenceReader for UnreachablePreferences {
    fn prefers_dark(&self) -> Option<bool> {
        panic!("system color scheme must not be read when a theme is persisted");
    }

    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

fn open_store(dir: &TempDir) -> ThemeStore {
    let kv = RedbStore::in_dir(dir.path()).expect("open preference store");
    ThemeStore::new(Arc::new(kv), Arc::new(NoopApplier))
}

#[test]
fn test_set_survives_fresh_initialization() {
    let dir = TempDir::new().unwrap();

    {
        let store = open_store(&dir);
        store.initialize(&StaticPreferences::light());
        store.set(Theme::Dark);
    }

    let store = open_store(&dir);
    assert_eq!(store.initialize(&UnreachablePreferences), Theme::Dark);
    assert_eq!(store.source(), ThemeSource::Persisted);
}

#[test]
fn test_first_launch_uses_system_preference() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    assert_eq!(store.initialize(&StaticPreferences::dark()), Theme::Dark);
    assert_eq!(store.source(), ThemeSource::System);

    // Initialization alone does not persist anything
    drop(store);
    let kv = RedbStore::in_dir(dir.path()).unwrap();
    assert_eq!(kv.get(THEME_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_toggle_pairs_persist() {
    let dir = TempDir::new().unwrap();
    let original;
    {
        let store = open_store(&dir);
        original = store.initialize(&StaticPreferences::light());
        store.toggle();
        store.toggle();
        assert_eq!(store.current(), original);
    }

    let store = open_store(&dir);
    assert_eq!(store.initialize(&UnreachablePreferences), original);
}

#[test]
fn test_persisted_literal_values() {
    let dir = TempDir::new().unwrap();
    let kv = Arc::new(RedbStore::in_dir(dir.path()).unwrap());
    let store = ThemeStore::new(kv.clone(), Arc::new(NoopApplier));
    store.initialize(&StaticPreferences::unavailable());

    store.set(Theme::Dark);
    assert_eq!(kv.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    store.toggle();
    assert_eq!(kv.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
}
