//! Authentication API integration tests
//!
//! Tests for token issuance, logout and the auth gate in front of the
//! protected routes.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{
    assert_error, auth_cookie, cookie_header, create_test_server, create_test_server_with,
    foreign_token_for, sample_post, test_config, TEST_SECRET,
};
use metablog::backend::auth::TokenService;
use metablog::shared::{AppConfig, Environment};

fn set_cookie_headers(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(String::from)
        .collect()
}

#[tokio::test]
async fn test_liveness() {
    let server = create_test_server().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "The MetaBlog server is running");
}

#[tokio::test]
async fn test_issue_token_sets_http_only_cookie() {
    let server = create_test_server().await;

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true }));

    let cookies = set_cookie_headers(&response);
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_issued_token_carries_email() {
    let server = create_test_server().await;

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    let token = response.cookie("token").value().to_string();
    let claims = TokenService::new(TEST_SECRET, 365).verify(&token).unwrap();
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn test_production_cookie_is_cross_site() {
    let config = AppConfig::builder()
        .token_secret(TEST_SECRET)
        .environment(Environment::Production)
        .build()
        .unwrap();
    let server = create_test_server_with(config).await;

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    let cookies = set_cookie_headers(&response);
    assert!(cookies[0].contains("Secure"));
    assert!(cookies[0].contains("SameSite=None"));
}

#[tokio::test]
async fn test_issue_token_rejects_invalid_email() {
    let server = create_test_server().await;

    let response = server
        .post("/jwt")
        .json(&json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let server = create_test_server().await;

    let response = server.get("/logout").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({ "success": true }));

    let cookies = set_cookie_headers(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token=;") || cookies[0].starts_with("token=\"\""));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn test_missing_cookie_is_unauthorized() {
    let server = create_test_server().await;

    let requests = [
        server
            .post("/post-blog/a@x.com")
            .json(&sample_post("T", "Tech", "Body"))
            .await,
        server
            .patch("/update-blog/1/a@x.com")
            .json(&json!({ "title": "New" }))
            .await,
        server.delete("/delete-blog/1").await,
        server.get("/wishlist/a@x.com").await,
        server.delete("/delete-wishlist/1").await,
    ];

    for response in &requests {
        assert_error(response, StatusCode::UNAUTHORIZED, "Unauthorized access");
    }
}

#[tokio::test]
async fn test_invalid_token_is_forbidden() {
    let server = create_test_server().await;
    let (name, value) = cookie_header("garbage");

    let response = server.get("/wishlist/a@x.com").add_header(name, value).await;

    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden access");
}

#[tokio::test]
async fn test_foreign_signature_is_forbidden() {
    let server = create_test_server().await;
    let (name, value) = cookie_header(&foreign_token_for("a@x.com"));

    let response = server.get("/wishlist/a@x.com").add_header(name, value).await;

    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden access");
}

#[tokio::test]
async fn test_expired_token_is_forbidden() {
    let server = create_test_server().await;
    // Expired well beyond the verification leeway.
    let expired = TokenService::new(TEST_SECRET, -1).issue("a@x.com").unwrap();
    let (name, value) = cookie_header(&expired);

    let response = server.get("/wishlist/a@x.com").add_header(name, value).await;

    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden access");
}

#[tokio::test]
async fn test_public_routes_ignore_cookie() {
    let server = create_test_server().await;
    let (name, value) = cookie_header("garbage");

    let response = server.get("/recent-blogs").add_header(name, value).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let server = create_test_server().await;

    let response = server.get("/no-such-route").await;

    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_valid_cookie_passes_gate() {
    let server = create_test_server_with(test_config()).await;
    let (name, value) = auth_cookie("a@x.com");

    let response = server.get("/wishlist/a@x.com").add_header(name, value).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!([]));
}
