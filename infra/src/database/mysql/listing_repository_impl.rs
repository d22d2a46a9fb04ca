//! MySQL implementation of the ListingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use hs_core::domain::entities::Listing;
use hs_core::errors::DomainError;
use hs_core::repositories::ListingRepository;

use super::errors::{column, query_failed};

/// MySQL implementation of ListingRepository
pub struct MySqlListingRepository {
    pool: MySqlPool,
}

impl MySqlListingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Listing entity
    pub(crate) fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<Listing, DomainError> {
        Ok(Listing {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            host_id: row.try_get("host_id").map_err(|e| column("host_id", e))?,
            title: row.try_get("title").map_err(|e| column("title", e))?,
            address: row.try_get("address").map_err(|e| column("address", e))?,
            thumbnail_url: row
                .try_get("thumbnail_url")
                .map_err(|e| column("thumbnail_url", e))?,
            nightly_price: row
                .try_get("nightly_price")
                .map_err(|e| column("nightly_price", e))?,
            max_guests: row.try_get("max_guests").map_err(|e| column("max_guests", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
        })
    }
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, host_id, title, address, thumbnail_url,
                   nightly_price, max_guests, created_at
            FROM listings
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("find listing", e))?;

        row.as_ref().map(Self::row_to_listing).transpose()
    }
}
