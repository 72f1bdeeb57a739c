//! Wishlist Data Structures
//!
//! A wishlist entry bookmarks one blog post for one owner. There is at most
//! one entry per (owner email, blog id) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_email, require_positive};
use crate::shared::error::SharedError;

/// A stored wishlist entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id")]
    pub id: i64,
    /// Referenced blog post
    pub blog_id: i64,
    /// Owner email
    pub email: String,
    /// Snapshot of the post title at the time it was added
    pub title: Option<String>,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /add-wishlist`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistEntry {
    pub blog_id: i64,
    pub email: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewWishlistEntry {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_positive("blogId", self.blog_id)?;
        require_email("email", &self.email)
    }
}
