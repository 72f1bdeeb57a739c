/**
 * Public Route Handlers
 *
 * Endpoints that run without an identity. The wishlist insert is public,
 * but is deduplicated per (owner, post).
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{issue_token, logout};
use crate::backend::blogs::{
    featured_blogs, get_blog, list_blogs, list_blogs_by_owner, recent_blogs,
};
use crate::backend::comments::{list_comments, post_comment};
use crate::backend::server::state::AppState;
use crate::backend::wishlist::add_wishlist;

/// Liveness text served at `/`
pub const LIVENESS_TEXT: &str = "The MetaBlog server is running";

async fn root_handler() -> &'static str {
    LIVENESS_TEXT
}

/// Configure unauthenticated routes
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(root_handler))
        // Session endpoints
        .route("/jwt", post(issue_token))
        .route("/logout", get(logout))
        // Blog reads
        .route("/blogs", get(list_blogs))
        .route("/blogs/{email}", get(list_blogs_by_owner))
        .route("/single-blog/{id}", get(get_blog))
        .route("/recent-blogs", get(recent_blogs))
        .route("/featured", get(featured_blogs))
        // Wishlist insert (dedup-checked)
        .route("/add-wishlist", post(add_wishlist))
        // Comments
        .route("/post-comment", post(post_comment))
        .route("/comment/{id}", get(list_comments))
}
