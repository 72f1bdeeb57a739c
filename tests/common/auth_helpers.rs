//! Authentication test helpers
//!
//! Provides utilities for issuing identity tokens with the test secret and
//! attaching them to requests as the `token` cookie.

use axum::http::{header, HeaderName, HeaderValue};
use metablog::backend::auth::TokenService;

/// Secret shared by the test servers and the tokens issued here
pub const TEST_SECRET: &str = "metablog-test-secret";

/// Issue a valid token for `email`
pub fn token_for(email: &str) -> String {
    TokenService::new(TEST_SECRET, 365)
        .issue(email)
        .expect("Failed to generate test token")
}

/// Issue a token for `email` signed with some other secret
pub fn foreign_token_for(email: &str) -> String {
    TokenService::new("some-other-secret", 365)
        .issue(email)
        .expect("Failed to generate foreign token")
}

/// `Cookie` request header carrying `token`
pub fn cookie_header(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("token={}", token))
        .expect("token should be a valid header value");
    (header::COOKIE, value)
}

/// `Cookie` request header carrying a valid token for `email`
pub fn auth_cookie(email: &str) -> (HeaderName, HeaderValue) {
    cookie_header(&token_for(email))
}
