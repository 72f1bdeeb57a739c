/**
 * Router Configuration
 *
 * Combines the public and protected routes, then applies the layers that
 * wrap every request:
 * 1. `TraceLayer` - request spans
 * 2. `CorsLayer` - credentialed CORS for configured origins, otherwise any
 *    origin without credentials
 *
 * Unknown routes fall through to a JSON 404.
 */

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::protected_routes::protected_routes;
use crate::backend::routes::public_routes::configure_public_routes;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router<()> {
    let router = configure_public_routes(Router::new());
    let router = router.merge(protected_routes(app_state.clone()));

    router
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_origins)),
        )
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

/// CORS policy for the configured origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
