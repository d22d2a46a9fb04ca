//! Listing repository trait. Listings are read-only from this service.

use async_trait::async_trait;

use crate::domain::entities::Listing;
use crate::errors::DomainError;

#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Find a listing by id, `Ok(None)` when it does not exist
    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, DomainError>;
}
