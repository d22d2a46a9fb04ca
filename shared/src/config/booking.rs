//! Booking policy configuration

use serde::{Deserialize, Serialize};

/// Booking policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Longest stay accepted in a single booking
    #[serde(default = "default_max_nights")]
    pub max_nights: i64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_nights: default_max_nights(),
        }
    }
}

fn default_max_nights() -> i64 {
    365
}
