//! Configuration for the user service

use hs_shared::config::MediaConfig;

/// Configuration for the user service
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Profile image assigned to newly registered users
    pub default_thumbnail_url: String,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self::from(&MediaConfig::default())
    }
}

impl From<&MediaConfig> for UserServiceConfig {
    fn from(media: &MediaConfig) -> Self {
        Self {
            default_thumbnail_url: media.default_thumbnail_url.clone(),
        }
    }
}
