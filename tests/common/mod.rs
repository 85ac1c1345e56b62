//! Common Test Utilities
//!
//! Shared helpers and fixtures. Every test gets its own server over a fresh
//! in-memory store, so tests never see each other's data.

use axum::http::StatusCode;
use axum_test::TestServer;
use fake::faker::name::en::FirstName;
use fake::Fake;
use serde_json::json;

use chat_backend::application::dto::response::{ChatResponse, UserResponse};
use chat_backend::config::Settings;
use chat_backend::infrastructure::repositories::Repositories;
use chat_backend::startup::{build_router, AppState};

/// Create a test server over empty in-memory repositories
pub fn test_server() -> TestServer {
    let settings = Settings::in_memory().expect("default settings should load");
    let state = AppState::new(Repositories::in_memory(), settings);
    TestServer::new(build_router(state)).expect("test server should start")
}

/// Generate a unique user name
pub fn unique_name() -> String {
    let first: String = FirstName().fake();
    format!("{}_{}", first, &uuid::Uuid::new_v4().simple().to_string()[..8])
}

/// Register a user and return it
pub async fn create_user(server: &TestServer) -> UserResponse {
    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": unique_name() }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<UserResponse>()
}

/// Create a chat between the given users and return it
pub async fn create_chat(server: &TestServer, members: &[&UserResponse]) -> ChatResponse {
    let ids: Vec<&str> = members.iter().map(|u| u.id.as_str()).collect();
    let response = server
        .post("/api/v1/chats")
        .json(&json!({ "members": ids }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ChatResponse>()
}

/// A well-formed identifier that no document has
pub fn unknown_id() -> String {
    mongodb::bson::oid::ObjectId::new().to_hex()
}
