use bytes::Bytes;

use cow_breed_api::application::ports::AudioStore;
use cow_breed_api::domain::{AudioKey, LanguageCode};
use cow_breed_api::infrastructure::storage::LocalAudioStore;

fn create_test_store() -> (tempfile::TempDir, LocalAudioStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn key(text: &str) -> AudioKey {
    AudioKey::derive(text, &LanguageCode::new("en"))
}

#[tokio::test]
async fn given_stored_clip_when_reading_file_then_bytes_match_original() {
    let (dir, store) = create_test_store();
    let key = key("gir");

    store.put(&key, Bytes::from_static(b"ID3 audio")).await.unwrap();

    let on_disk = std::fs::read(dir.path().join(key.file_name())).unwrap();
    assert_eq!(on_disk, b"ID3 audio");
}

#[tokio::test]
async fn given_stored_clip_when_checking_then_file_exists_under_key_name() {
    let (dir, store) = create_test_store();
    let key = key("sahiwal");

    store.put(&key, Bytes::from_static(b"audio")).await.unwrap();

    assert!(store.contains(&key).await.unwrap());
    assert!(dir.path().join(key.file_name()).is_file());
}

#[tokio::test]
async fn given_missing_clip_when_checking_then_returns_false() {
    let (_dir, store) = create_test_store();

    assert!(!store.contains(&key("ongole")).await.unwrap());
}

#[tokio::test]
async fn given_same_key_written_twice_when_listing_then_holds_single_clip() {
    let (dir, store) = create_test_store();
    let key = key("tharparkar");

    store.put(&key, Bytes::from_static(b"same")).await.unwrap();
    store.put(&key, Bytes::from_static(b"same")).await.unwrap();

    let on_disk = std::fs::read(dir.path().join(key.file_name())).unwrap();
    assert_eq!(on_disk, b"same");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn given_nested_missing_directory_when_creating_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("static").join("audio");

    LocalAudioStore::new(root.clone()).unwrap();

    assert!(root.is_dir());
}
