//! Comment HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::store::{CommentStore, DocumentStore};
use crate::shared::models::{parse_id, Comment, InsertAck, NewComment};

/// POST /post-comment
pub async fn post_comment(
    State(store): State<Arc<dyn DocumentStore>>,
    body: Result<Json<NewComment>, JsonRejection>,
) -> Result<Json<InsertAck>, BackendError> {
    let Json(comment) = body?;
    comment.validate()?;
    Ok(Json(store.insert_comment(&comment).await?))
}

/// GET /comment/{id}, where `id` is the blog post identifier
pub async fn list_comments(
    State(store): State<Arc<dyn DocumentStore>>,
    Path(blog_id): Path<String>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let blog_id = parse_id(&blog_id)?;
    Ok(Json(store.find_comments(blog_id).await?))
}
