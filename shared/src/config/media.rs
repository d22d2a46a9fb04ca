//! Profile image storage configuration

use serde::{Deserialize, Serialize};

/// Image storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Thumbnail assigned to newly registered users
    #[serde(default = "default_thumbnail_url")]
    pub default_thumbnail_url: String,

    /// Directory uploaded images are written to
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Public URL prefix under which `storage_dir` is served
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,

    /// Largest accepted decoded image in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            default_thumbnail_url: default_thumbnail_url(),
            storage_dir: default_storage_dir(),
            public_base_url: default_public_base_url(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

fn default_thumbnail_url() -> String {
    String::from("/media/default-avatar.png")
}

fn default_storage_dir() -> String {
    String::from("media")
}

fn default_public_base_url() -> String {
    String::from("/media")
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}
