//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Listing;
use crate::errors::DomainError;

use super::trait_::ListingRepository;

/// Mock listing repository for testing
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<i64, Listing>>>,
}

impl MockListingRepository {
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a listing, replacing any with the same id
    pub async fn insert(&self, listing: Listing) {
        self.listings.write().await.insert(listing.id, listing);
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, DomainError> {
        Ok(self.listings.read().await.get(&id).cloned())
    }
}
