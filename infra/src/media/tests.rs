use hs_core::services::{ImageStore, ImageUpload};
use hs_shared::config::MediaConfig;

use super::LocalImageStore;

fn store_in(dir: &tempfile::TempDir, max_image_bytes: usize) -> LocalImageStore {
    LocalImageStore::new(&MediaConfig {
        storage_dir: dir.path().join("avatars").to_string_lossy().into_owned(),
        public_base_url: "/media/".to_string(),
        max_image_bytes,
        ..MediaConfig::default()
    })
}

fn image(file_name: &str, bytes: &[u8]) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: bytes.to_vec(),
    }
}

#[tokio::test]
async fn test_upload_writes_file_and_returns_public_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    let url = store.upload(&image("Me.PNG", b"\x89PNG data")).await.unwrap();

    assert!(url.starts_with("/media/"));
    assert!(url.ends_with(".png"));

    let file_name = url.rsplit('/').next().unwrap();
    let written = std::fs::read(store.storage_dir().join(file_name)).unwrap();
    assert_eq!(written, b"\x89PNG data");
}

#[tokio::test]
async fn test_upload_rejects_oversized_image() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 4);

    let err = store.upload(&image("me.png", b"12345")).await.unwrap_err();
    assert!(err.contains("exceeds 4 bytes"));
    assert!(!store.storage_dir().exists());
}

#[tokio::test]
async fn test_upload_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir, 1024);

    assert!(store.upload(&image("script.sh", b"#!/bin/sh")).await.is_err());
    assert!(store.upload(&image("noext", b"data")).await.is_err());
    assert!(store.upload(&image("empty.png", b"")).await.is_err());
}
