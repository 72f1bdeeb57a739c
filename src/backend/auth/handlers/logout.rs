/**
 * Logout Handler
 *
 * GET /logout expires the identity cookie. Tokens are not tracked
 * server-side, so there is nothing else to revoke.
 */
use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::handlers::types::SessionResponse;
use crate::backend::server::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    (
        jar.add(state.cookies.removal_cookie()),
        Json(SessionResponse { success: true }),
    )
}
