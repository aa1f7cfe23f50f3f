use super::*;
use crate::state::preference::{Flavor, Theme};

#[test]
fn key_names_match_cookie_names() {
    assert_eq!(PreferenceKey::Theme.name(), "preferred-theme");
    assert_eq!(PreferenceKey::Flavor.name(), "preferred-flavor");
}

#[test]
fn memory_store_round_trips_and_logs_writes() {
    let store = MemoryStore::new();
    assert_eq!(store.get(PreferenceKey::Theme), None);

    store.set(PreferenceKey::Theme, "dark");
    store.set(PreferenceKey::Theme, "light");

    assert_eq!(store.get(PreferenceKey::Theme).as_deref(), Some("light"));
    assert_eq!(
        store.writes(),
        vec![(PreferenceKey::Theme, "dark".to_owned()), (PreferenceKey::Theme, "light".to_owned())]
    );
}

#[test]
fn seeded_values_are_not_writes() {
    let store = MemoryStore::new().with(PreferenceKey::Flavor, "deep");
    assert_eq!(store.get(PreferenceKey::Flavor).as_deref(), Some("deep"));
    assert!(store.writes().is_empty());
}

#[test]
fn stored_parses_recognized_values() {
    let store = MemoryStore::new()
        .with(PreferenceKey::Theme, "dark")
        .with(PreferenceKey::Flavor, "happy-headers");
    assert_eq!(stored::<Theme>(&store, PreferenceKey::Theme), Some(Theme::Dark));
    assert_eq!(stored::<Flavor>(&store, PreferenceKey::Flavor), Some(Flavor::HappyHeaders));
}

#[test]
fn stored_treats_stale_values_as_absent() {
    let store = MemoryStore::new()
        .with(PreferenceKey::Theme, "solarized")
        .with(PreferenceKey::Flavor, "");
    assert_eq!(stored::<Theme>(&store, PreferenceKey::Theme), None);
    assert_eq!(stored::<Flavor>(&store, PreferenceKey::Flavor), None);
}
