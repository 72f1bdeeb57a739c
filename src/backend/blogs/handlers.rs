//! Blog HTTP Handlers
//!
//! Each handler validates its input, performs one store call (deletion
//! performs a lookup first to check ownership) and echoes the result.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::{BlogStore, DocumentStore, FEATURED_LIMIT, RECENT_LIMIT};
use crate::shared::models::{
    parse_id, BlogFilter, BlogPost, BlogUpdate, DeleteAck, InsertAck, NewBlogPost, UpdateAck,
};

/// POST /post-blog/{email}
///
/// The token email must equal the path email, and the body email when one
/// is supplied. The path check runs before the body is decoded. The post is
/// stored under the path email.
pub async fn create_blog(
    State(store): State<Arc<dyn DocumentStore>>,
    AuthUser(user): AuthUser,
    Path(email): Path<String>,
    body: Result<Json<NewBlogPost>, JsonRejection>,
) -> Result<Json<InsertAck>, BackendError> {
    user.ensure_owner(&email)?;
    let Json(post) = body?;
    if let Some(body_email) = &post.email {
        user.ensure_owner(body_email)?;
    }
    post.validate()?;

    let ack = store.insert_blog(&email, &post).await?;
    tracing::info!("Blog {} created by {}", ack.inserted_id, email);
    Ok(Json(ack))
}

/// DELETE /delete-blog/{id}
///
/// A missing post yields a no-match acknowledgment; a post owned by someone
/// else is forbidden.
pub async fn delete_blog(
    State(store): State<Arc<dyn DocumentStore>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, BackendError> {
    let id = parse_id(&id)?;

    let Some(post) = store.find_blog(id).await? else {
        return Ok(Json(DeleteAck::no_match()));
    };
    user.ensure_owner(&post.email)?;

    let ack = store.delete_blog(id, &user.email).await?;
    tracing::info!("Blog {} deleted by {}", id, user.email);
    Ok(Json(ack))
}

/// GET /blogs?search=&category=
pub async fn list_blogs(
    State(store): State<Arc<dyn DocumentStore>>,
    Query(filter): Query<BlogFilter>,
) -> Result<Json<Vec<BlogPost>>, BackendError> {
    let filter = filter.normalized();
    Ok(Json(store.find_blogs(&filter).await?))
}

/// GET /blogs/{email}
pub async fn list_blogs_by_owner(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(email): Path<String>,
) -> Result<Json<Vec<BlogPost>>, BackendError> {
    Ok(Json(store.find_blogs_by_owner(&email).await?))
}

/// GET /single-blog/{id}; `null` when no post has this identifier
pub async fn get_blog(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(id): Path<String>,
) -> Result<Json<Option<BlogPost>>, BackendError> {
    let id = parse_id(&id)?;
    Ok(Json(store.find_blog(id).await?))
}

/// PATCH /update-blog/{id}/{email}
///
/// The update is filtered by identifier and owner, so another owner's post
/// is never matched.
pub async fn update_blog(
    State(store): State<Arc<dyn DocumentStore>>,
    AuthUser(user): AuthUser,
    Path((id, email)): Path<(String, String)>,
    body: Result<Json<BlogUpdate>, JsonRejection>,
) -> Result<Json<UpdateAck>, BackendError> {
    user.ensure_owner(&email)?;
    let id = parse_id(&id)?;
    let Json(update) = body?;
    update.validate()?;

    let ack = store.update_blog(id, &email, &update).await?;
    tracing::info!(
        "Blog {} update by {}: matched {}, modified {}",
        id,
        email,
        ack.matched_count,
        ack.modified_count
    );
    Ok(Json(ack))
}

/// GET /recent-blogs
pub async fn recent_blogs(
    State(store): State<Arc<dyn DocumentStore>>,
) -> Result<Json<Vec<BlogPost>>, BackendError> {
    Ok(Json(store.recent_blogs(RECENT_LIMIT).await?))
}

/// GET /featured
pub async fn featured_blogs(
    State(store): State<Arc<dyn DocumentStore>>,
) -> Result<Json<Vec<BlogPost>>, BackendError> {
    Ok(Json(store.featured_blogs(FEATURED_LIMIT).await?))
}
