//! Profile image storage

use async_trait::async_trait;

/// An uploaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client-supplied file name, used only for its extension
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Lower-cased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }
}

/// Trait for image storage integration
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store the image and return the URL it is served from
    async fn upload(&self, image: &ImageUpload) -> Result<String, String>;
}

#[cfg(any(test, feature = "testing"))]
pub use mock::MockImageStore;

#[cfg(any(test, feature = "testing"))]
mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock store that records uploads and returns predictable URLs
    #[derive(Clone, Default)]
    pub struct MockImageStore {
        pub uploads: Arc<Mutex<Vec<ImageUpload>>>,
        pub should_fail: bool,
    }

    impl MockImageStore {
        pub fn new(should_fail: bool) -> Self {
            Self {
                uploads: Arc::new(Mutex::new(Vec::new())),
                should_fail,
            }
        }

        pub fn upload_count(&self) -> usize {
            self.uploads.lock().map(|u| u.len()).unwrap_or(0)
        }
    }

    #[async_trait]
    impl ImageStore for MockImageStore {
        async fn upload(&self, image: &ImageUpload) -> Result<String, String> {
            if self.should_fail {
                return Err("Image store unavailable".to_string());
            }
            let mut uploads = self.uploads.lock().map_err(|e| e.to_string())?;
            uploads.push(image.clone());
            Ok(format!("https://img.test/{}/{}", uploads.len(), image.file_name))
        }
    }
}
