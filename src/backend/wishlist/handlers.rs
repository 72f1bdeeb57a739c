//! Wishlist HTTP Handlers
//!
//! At most one entry exists per (owner, post). The handler checks first and
//! the store enforces the same rule on insert, so two racing requests still
//! end with one entry and one `Conflict`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::{DocumentStore, StoreError, WishlistStore};
use crate::shared::models::{parse_id, DeleteAck, InsertAck, NewWishlistEntry, WishlistEntry};

const ALREADY_ADDED: &str = "Already added to wishlist";

/// POST /add-wishlist
pub async fn add_wishlist(
    State(store): State<Arc<dyn DocumentStore>>,
    body: Result<Json<NewWishlistEntry>, JsonRejection>,
) -> Result<Json<InsertAck>, BackendError> {
    let Json(entry) = body?;
    entry.validate()?;

    if store
        .find_wishlist_entry(&entry.email, entry.blog_id)
        .await?
        .is_some()
    {
        tracing::warn!("Blog {} already in wishlist of {}", entry.blog_id, entry.email);
        return Err(BackendError::conflict(ALREADY_ADDED));
    }

    let ack = store.insert_wishlist(&entry).await.map_err(|e| match e {
        StoreError::Duplicate { .. } => {
            tracing::warn!("Concurrent wishlist insert for blog {} by {}", entry.blog_id, entry.email);
            BackendError::conflict(ALREADY_ADDED)
        }
        other => BackendError::from(other),
    })?;

    tracing::info!("Blog {} added to wishlist of {}", entry.blog_id, entry.email);
    Ok(Json(ack))
}

/// GET /wishlist/{email}
pub async fn list_wishlist(
    State(store): State<Arc<dyn DocumentStore>>,
    AuthUser(user): AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<WishlistEntry>>, BackendError> {
    user.ensure_owner(&email)?;
    Ok(Json(store.find_wishlist(&email).await?))
}

/// DELETE /delete-wishlist/{id}
pub async fn delete_wishlist(
    State(store): State<Arc<dyn DocumentStore>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, BackendError> {
    let id = parse_id(&id)?;

    let Some(entry) = store.find_wishlist_by_id(id).await? else {
        return Ok(Json(DeleteAck::no_match()));
    };
    user.ensure_owner(&entry.email)?;

    Ok(Json(store.delete_wishlist(id, &user.email).await?))
}
