//! Favorites persistence across a simulated restart.

use anime_explorer::domain::AnimeId;
use anime_explorer::favorites::{FavoritesStore, FileStorage};
use std::path::PathBuf;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("anime-explorer-test-{}", uuid::Uuid::new_v4()))
}

#[test]
fn favorites_survive_restart() {
    let dir = temp_dir();

    let mut store = FavoritesStore::open(FileStorage::new(&dir)).expect("failed to open store");
    assert!(store.is_empty());

    store
        .toggle(AnimeId::new(52991), "Sousou no Frieren", "https://cdn/52991.jpg")
        .unwrap();
    store
        .toggle(AnimeId::new(16498), "Attack on Titan", "https://cdn/16498.jpg")
        .unwrap();
    store
        .toggle(AnimeId::new(1), "Cowboy Bebop", "https://cdn/1.jpg")
        .unwrap();
    store
        .toggle(AnimeId::new(16498), "Attack on Titan", "https://cdn/16498.jpg")
        .unwrap();
    let before = store.all().to_vec();
    drop(store);

    let reopened = FavoritesStore::open(FileStorage::new(&dir)).expect("failed to reopen store");
    assert_eq!(reopened.all(), before.as_slice());
    assert!(reopened.contains(AnimeId::new(1)));
    assert!(!reopened.contains(AnimeId::new(16498)));

    let raw = std::fs::read_to_string(dir.join("animeFavorites.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["mal_id"], 52991);
    assert_eq!(json[1]["imageUrl"], "https://cdn/1.jpg");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_storage_directory_starts_empty() {
    let dir = temp_dir();
    let store = FavoritesStore::open(FileStorage::new(&dir)).unwrap();
    assert!(store.all().is_empty());
    assert!(!dir.exists());
}
