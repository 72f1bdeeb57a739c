//! Test server helpers
//!
//! Builds the full application router (same routes, gate and layers as the
//! binary) over the in-memory store and wraps it in an `axum_test::TestServer`.

use axum_test::TestServer;
use metablog::backend::server::create_app;
use metablog::shared::{AppConfig, Environment};
use serde_json::{json, Value};

use super::auth_helpers::{cookie_header, token_for, TEST_SECRET};

/// Configuration used by every test server
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .token_secret(TEST_SECRET)
        .environment(Environment::Development)
        .build()
        .expect("Failed to build test configuration")
}

/// Create a test server backed by a fresh in-memory store
pub async fn create_test_server() -> TestServer {
    create_test_server_with(test_config()).await
}

/// Create a test server from an explicit configuration
pub async fn create_test_server_with(config: AppConfig) -> TestServer {
    let app = create_app(&config).await.expect("Failed to create app");
    TestServer::new(app.router).expect("Failed to create test server")
}

/// Request body for a new post
pub fn sample_post(title: &str, category: &str, long_description: &str) -> Value {
    json!({
        "title": title,
        "category": category,
        "shortDescription": format!("About {}", title),
        "longDescription": long_description,
        "image": "https://img.example/cover.png",
        "ownerName": "Test Owner",
        "ownerPhoto": "https://img.example/owner.png"
    })
}

/// Create a post as `email` and return its identifier
pub async fn create_post(server: &TestServer, email: &str, body: &Value) -> i64 {
    let (name, value) = cookie_header(&token_for(email));
    let response = server
        .post(&format!("/post-blog/{}", email))
        .add_header(name, value)
        .json(body)
        .await;
    response.assert_status_ok();

    let ack: Value = response.json();
    ack["insertedId"]
        .as_i64()
        .expect("insert acknowledgment should carry insertedId")
}
