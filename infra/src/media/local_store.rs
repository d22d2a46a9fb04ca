//! Filesystem-backed image store
//!
//! Images are written under `storage_dir` with a generated name. The URL
//! handed back is `public_base_url` joined with that name; when the base is
//! a path, the API mounts `storage_dir` there.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, error};
use uuid::Uuid;

use hs_core::services::{ImageStore, ImageUpload};
use hs_shared::config::MediaConfig;

use crate::InfrastructureError;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Image store writing to a local directory
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    storage_dir: PathBuf,
    public_base_url: String,
    max_image_bytes: usize,
}

impl LocalImageStore {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            storage_dir: PathBuf::from(&config.storage_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_image_bytes: config.max_image_bytes,
        }
    }

    pub fn storage_dir(&self) -> &std::path::Path {
        &self.storage_dir
    }

    /// Create the storage directory so it can be served before the first upload
    pub async fn prepare(&self) -> Result<(), InfrastructureError> {
        tokio::fs::create_dir_all(&self.storage_dir).await?;
        Ok(())
    }

    async fn store(&self, image: &ImageUpload) -> Result<String, InfrastructureError> {
        if image.bytes.is_empty() {
            return Err(InfrastructureError::Media("Image is empty".to_string()));
        }
        if image.bytes.len() > self.max_image_bytes {
            return Err(InfrastructureError::Media(format!(
                "Image exceeds {} bytes",
                self.max_image_bytes
            )));
        }

        let extension = image
            .extension()
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| {
                InfrastructureError::Media(format!("Unsupported image type: {}", image.file_name))
            })?;

        tokio::fs::create_dir_all(&self.storage_dir).await?;

        let file_name = format!("{}.{}", Uuid::new_v4().simple(), extension);
        tokio::fs::write(self.storage_dir.join(&file_name), &image.bytes).await?;

        debug!(file = %file_name, size = image.bytes.len(), "Image stored");
        Ok(format!("{}/{}", self.public_base_url, file_name))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn upload(&self, image: &ImageUpload) -> Result<String, String> {
        self.store(image).await.map_err(|e| {
            error!(file = %image.file_name, error = %e, "Image upload failed");
            e.to_string()
        })
    }
}
