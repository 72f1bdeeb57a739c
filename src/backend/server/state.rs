/**
 * Application State Management
 *
 * `AppState` is the only state shared across handlers. It is constructed
 * once at startup and cloned cheaply into every request:
 * - the document store handle (`Arc<dyn DocumentStore>`)
 * - the token service
 * - the cookie policy
 *
 * Handlers hold no in-memory authoritative data between requests.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{CookiePolicy, TokenService};
use crate::backend::store::DocumentStore;
use crate::shared::config::AppConfig;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub tokens: TokenService,
    pub cookies: CookiePolicy,
}

impl AppState {
    /// Build the state around an already opened store
    pub fn new(config: &AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            tokens: TokenService::new(&config.token_secret, config.token_ttl_days),
            cookies: CookiePolicy::for_environment(config.environment),
        }
    }
}

impl FromRef<AppState> for Arc<dyn DocumentStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
