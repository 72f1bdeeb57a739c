//! Wishlist API integration tests

use std::future::IntoFuture;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, auth_cookie, create_post, create_test_server, sample_post};

fn wishlist_body(blog_id: i64, email: &str) -> Value {
    json!({
        "blogId": blog_id,
        "email": email,
        "title": "Saved post",
        "category": "Tech",
        "shortDescription": "Worth reading",
        "image": "https://img.example/cover.png"
    })
}

#[tokio::test]
async fn test_add_and_list_wishlist() {
    let server = create_test_server().await;
    let blog_id = create_post(&server, "b@x.com", &sample_post("Post", "Tech", "Body")).await;

    let response = server
        .post("/add-wishlist")
        .json(&wishlist_body(blog_id, "a@x.com"))
        .await;
    response.assert_status_ok();
    let ack: Value = response.json();
    assert_eq!(ack["acknowledged"], true);

    let (name, value) = auth_cookie("a@x.com");
    let entries: Value = server
        .get("/wishlist/a@x.com")
        .add_header(name, value)
        .await
        .json();

    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["_id"], ack["insertedId"]);
    assert_eq!(entries[0]["blogId"], blog_id);
    assert_eq!(entries[0]["email"], "a@x.com");
    assert_eq!(entries[0]["title"], "Saved post");
}

#[tokio::test]
async fn test_duplicate_wishlist_is_conflict() {
    let server = create_test_server().await;

    server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "a@x.com"))
        .await
        .assert_status_ok();

    let response = server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "a@x.com"))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Already added to wishlist");
}

#[tokio::test]
async fn test_same_post_for_different_owners() {
    let server = create_test_server().await;

    server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "a@x.com"))
        .await
        .assert_status_ok();
    server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "b@x.com"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_concurrent_duplicate_inserts_leave_one_entry() {
    let server = create_test_server().await;

    let first = server
        .post("/add-wishlist")
        .json(&wishlist_body(9, "a@x.com"))
        .into_future();
    let second = server
        .post("/add-wishlist")
        .json(&wishlist_body(9, "a@x.com"))
        .into_future();
    let (first, second) = tokio::join!(first, second);

    let mut statuses = vec![first.status_code(), second.status_code()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);

    let (name, value) = auth_cookie("a@x.com");
    let entries: Value = server
        .get("/wishlist/a@x.com")
        .add_header(name, value)
        .await
        .json();
    assert_eq!(entries.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_wishlist_rejects_invalid_email() {
    let server = create_test_server().await;

    let response = server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "nobody"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_wishlist_identity_mismatch() {
    let server = create_test_server().await;
    let (name, value) = auth_cookie("a@x.com");

    let response = server
        .get("/wishlist/b@x.com")
        .add_header(name, value)
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden access");
}

#[tokio::test]
async fn test_delete_wishlist_entry() {
    let server = create_test_server().await;
    let ack: Value = server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "a@x.com"))
        .await
        .json();
    let id = ack["insertedId"].as_i64().unwrap();

    let (name, value) = auth_cookie("a@x.com");
    let response = server
        .delete(&format!("/delete-wishlist/{}", id))
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let ack: Value = response.json();
    assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 1 }));

    // The pair can be added again once removed.
    server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "a@x.com"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_missing_wishlist_entry_is_no_match() {
    let server = create_test_server().await;
    let (name, value) = auth_cookie("a@x.com");

    let response = server
        .delete("/delete-wishlist/31337")
        .add_header(name, value)
        .await;

    response.assert_status_ok();
    let ack: Value = response.json();
    assert_eq!(ack["deletedCount"], 0);
}

#[tokio::test]
async fn test_delete_other_owners_wishlist_entry_is_forbidden() {
    let server = create_test_server().await;
    let ack: Value = server
        .post("/add-wishlist")
        .json(&wishlist_body(7, "b@x.com"))
        .await
        .json();
    let id = ack["insertedId"].as_i64().unwrap();

    let (name, value) = auth_cookie("a@x.com");
    let response = server
        .delete(&format!("/delete-wishlist/{}", id))
        .add_header(name, value)
        .await;

    assert_error(&response, StatusCode::FORBIDDEN, "Forbidden access");
}

#[tokio::test]
async fn test_add_wishlist_missing_fields_is_json_bad_request() {
    let server = create_test_server().await;

    let response = server
        .post("/add-wishlist")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
}
