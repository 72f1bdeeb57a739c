/**
 * Protected Route Handlers
 *
 * Every route here sits behind `auth_middleware`, applied with
 * `route_layer` so unknown paths still reach the fallback instead of
 * being rejected as unauthenticated.
 */

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::backend::blogs::{create_blog, delete_blog, update_blog};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::wishlist::{delete_wishlist, list_wishlist};

/// Build the router of owner-tied routes, gated by the auth middleware
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/post-blog/{email}", post(create_blog))
        .route("/update-blog/{id}/{email}", patch(update_blog))
        .route("/delete-blog/{id}", delete(delete_blog))
        .route("/wishlist/{email}", get(list_wishlist))
        .route("/delete-wishlist/{id}", delete(delete_wishlist))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
}
