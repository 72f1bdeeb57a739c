//! Record schemas for the three collections and the request bodies that
//! create or change them.
//!
//! Every request type exposes a `validate` method that is called at the
//! HTTP boundary before any storage call is made.

pub mod ack;
pub mod blog;
pub mod comment;
pub mod wishlist;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
pub use blog::{BlogFilter, BlogPost, BlogUpdate, NewBlogPost};
pub use comment::{Comment, NewComment};
pub use wishlist::{NewWishlistEntry, WishlistEntry};

use crate::shared::error::SharedError;

/// Parse a path identifier; identifiers are positive integers
pub fn parse_id(raw: &str) -> Result<i64, SharedError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| SharedError::validation("id", format!("'{}' is not a valid identifier", raw)))
}

/// Minimal shape check: some text, an `@`, some text
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.trim().is_empty() && !domain.trim().is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

pub(crate) fn require_email(field: &str, email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a valid email address"))
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        Err(SharedError::validation(field, "must not be blank"))
    } else {
        Ok(())
    }
}

pub(crate) fn require_positive(field: &str, value: i64) -> Result<(), SharedError> {
    if value > 0 {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a positive identifier"))
    }
}
