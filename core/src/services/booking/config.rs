//! Configuration for the booking service

use hs_shared::config::BookingConfig;

/// Configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// Longest stay accepted in a single booking
    pub max_nights: i64,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self::from(&BookingConfig::default())
    }
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(config: &BookingConfig) -> Self {
        Self {
            max_nights: config.max_nights,
        }
    }
}
