//! Read projections of users returned by the user workflow.
//!
//! None of these carry the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Listing, RoleName, User};

/// Summary returned by registration and the user list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<RoleName>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            roles: user.role_names(),
        }
    }
}

/// Full profile of a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub thumbnail_url: String,
    pub roles: Vec<RoleName>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            phone: user.phone.clone(),
            thumbnail_url: user.thumbnail_url.clone(),
            roles: user.role_names(),
            created_at: user.created_at,
        }
    }
}

/// Listing summary shown in a favorites list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFavorite {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub thumbnail_url: Option<String>,
    pub nightly_price: i64,
}

impl From<&Listing> for ListingFavorite {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            address: listing.address.clone(),
            thumbnail_url: listing.thumbnail_url.clone(),
            nightly_price: listing.nightly_price,
        }
    }
}

/// A user's favorite listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFavorites {
    pub user_id: i64,
    pub favorites: Vec<ListingFavorite>,
}
