use country_atlas::utils::error::Result;
use country_atlas::{FavoritesStore, LocalStorage, Storage};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FavoritesStore<LocalStorage> {
    FavoritesStore::new(LocalStorage::new(dir.path()))
}

#[test]
fn starts_empty_without_prior_writes() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.get_favorites().is_empty());
    assert!(!store.is_favorite("IDN"));
}

#[test]
fn add_then_check_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_to_favorites("IDN");

    assert!(store.is_favorite("IDN"));
    assert_eq!(store.get_favorites(), vec!["IDN"]);
    assert!(dir.path().join("favorites.json").exists());
}

#[test]
fn duplicate_add_keeps_a_single_entry() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_to_favorites("IDN");
    store.add_to_favorites("IDN");

    let favorites = store.get_favorites();
    assert_eq!(favorites.iter().filter(|c| *c == "IDN").count(), 1);
    assert_eq!(favorites.len(), 1);
}

#[test]
fn remove_clears_membership() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_to_favorites("IDN");
    store.remove_from_favorites("IDN");

    assert!(!store.is_favorite("IDN"));
    assert!(store.get_favorites().is_empty());
}

#[test]
fn preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_to_favorites("IDN");
    store.add_to_favorites("JPN");
    store.add_to_favorites("BRA");
    store.remove_from_favorites("JPN");

    assert_eq!(store.get_favorites(), vec!["IDN", "BRA"]);
}

#[test]
fn survives_across_store_instances() {
    let dir = TempDir::new().unwrap();
    store_in(&dir).add_to_favorites("ZAF");

    let reopened = store_in(&dir);
    assert!(reopened.is_favorite("ZAF"));
}

#[test]
fn unreadable_payload_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("favorites.json"), "not json").unwrap();

    let store = store_in(&dir);
    assert!(store.get_favorites().is_empty());
}

struct UnavailableStorage;

impl Storage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no storage context").into())
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no storage context").into())
    }
}

#[test]
fn unavailable_backend_behaves_as_empty_and_never_errors() {
    let store = FavoritesStore::new(UnavailableStorage);

    assert!(store.get_favorites().is_empty());
    store.add_to_favorites("IDN");
    store.remove_from_favorites("IDN");
    assert!(!store.is_favorite("IDN"));
}
