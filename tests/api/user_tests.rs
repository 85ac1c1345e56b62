//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chat_backend::application::dto::response::UserResponse;

use crate::common::{create_user, test_server, unique_name, unknown_id};

/// Test user creation returns 201 with an id
#[tokio::test]
async fn test_create_user() {
    let server = test_server();
    let name = unique_name();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": name }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let user = response.json::<UserResponse>();
    assert_eq!(user.name, name);
    assert_eq!(user.id.len(), 24);
}

/// Test a second user with the same name is refused and not stored
#[tokio::test]
async fn test_create_user_with_duplicate_name_fails() {
    let server = test_server();
    let name = unique_name();
    server
        .post("/api/v1/users")
        .json(&json!({ "name": name }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": name }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<String>(),
        format!("User with name {} is already registered", name)
    );
}

/// Test surrounding whitespace does not count towards the name length
#[tokio::test]
async fn test_create_user_with_padded_name_is_trimmed() {
    let server = test_server();
    let name = "n".repeat(64);

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": format!(" {}", name) }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<UserResponse>().name, name);
}

/// Test empty name is rejected
#[tokio::test]
async fn test_create_user_with_empty_name_fails() {
    let server = test_server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Test malformed JSON is a 400 with a JSON string body
#[tokio::test]
async fn test_create_user_with_malformed_body_fails() {
    let server = test_server();

    let response = server.post("/api/v1/users").text("{\"name\":").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<String>().starts_with("Invalid request payload"));
}

/// Test fetching a user by id
#[tokio::test]
async fn test_get_user() {
    let server = test_server();
    let user = create_user(&server).await;

    let response = server.get(&format!("/api/v1/users/{}", user.id)).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<UserResponse>(), user);
}

/// Test unknown and malformed user ids
#[tokio::test]
async fn test_get_user_errors() {
    let server = test_server();

    server
        .get(&format!("/api/v1/users/{}", unknown_id()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/api/v1/users/42")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
