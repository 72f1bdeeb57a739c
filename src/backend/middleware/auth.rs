/**
 * Authentication Middleware
 *
 * The auth gate for protected routes. It reads the `token` cookie, verifies
 * it, and attaches the decoded identity to the request extensions before
 * the handler runs.
 *
 * - no cookie → 401 Unauthorized, the handler never runs
 * - verification fails → 403 Forbidden, the handler never runs
 * - verification succeeds → `AuthenticatedUser` inserted, handler runs
 *
 * Verification is one synchronous call; its result is inspected before
 * `next.run` is reached.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::TOKEN_COOKIE;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Identity decoded from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl AuthenticatedUser {
    /// Owner-identity check: the verified email must equal the claimed one
    pub fn ensure_owner(&self, claimed: &str) -> Result<(), BackendError> {
        if self.email == claimed {
            Ok(())
        } else {
            tracing::warn!(
                "Identity mismatch: token for {} used for {}",
                self.email,
                claimed
            );
            Err(BackendError::forbidden("Forbidden access"))
        }
    }
}

/// Authentication middleware
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = jar.get(TOKEN_COOKIE).map(|cookie| cookie.value()).ok_or_else(|| {
        tracing::warn!("Missing identity cookie on {}", request.uri().path());
        BackendError::unauthorized("Unauthorized access")
    })?;

    let claims = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::forbidden("Forbidden access")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extract authenticated user from request extensions
pub fn extract_authenticated_user(parts: &Parts) -> Result<AuthenticatedUser, BackendError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            BackendError::unauthorized("Unauthorized access")
        })
}

/// Axum extractor for the user attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_authenticated_user(parts).map(AuthUser)
    }
}
