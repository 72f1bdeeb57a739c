/**
 * Token Handler
 *
 * POST /jwt exchanges an email for a signed identity token, delivered as
 * the `token` cookie rather than in the response body.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::{SessionResponse, TokenRequest};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Issue an identity cookie
///
/// # Errors
///
/// * `400 Bad Request` - If the email is not well-formed
/// * `500 Internal Server Error` - If the token cannot be signed
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<SessionResponse>), BackendError> {
    let Json(request) = body?;
    request.validate()?;

    let token = state.tokens.issue(&request.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::from(e)
    })?;

    tracing::info!("Issued identity token for {}", request.email);

    Ok((
        jar.add(state.cookies.token_cookie(token)),
        Json(SessionResponse { success: true }),
    ))
}
