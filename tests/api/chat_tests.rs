//! Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chat_backend::application::dto::response::{ChatResponse, UserResponse};

use crate::common::{create_chat, create_user, test_server, unknown_id};

/// Test chat creation defaults the name and keeps member order
#[tokio::test]
async fn test_create_chat() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;

    let response = server
        .post("/api/v1/chats")
        .json(&json!({ "members": [a.id, b.id] }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let chat = response.json::<ChatResponse>();
    assert_eq!(chat.name, "private");
    assert_eq!(chat.members, vec![a.id, b.id]);
}

/// Test chat with an unknown member fails and creates nothing
#[tokio::test]
async fn test_create_chat_with_unknown_member_fails() {
    let server = test_server();
    let a = create_user(&server).await;
    let ghost = unknown_id();

    let response = server
        .post("/api/v1/chats")
        .json(&json!({ "name": "team", "members": [a.id, ghost] }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<String>(),
        format!("User with id {} not found", ghost)
    );

    let chats = server
        .get("/api/v1/chats")
        .add_query_param("user", &a.id)
        .await
        .json::<Vec<ChatResponse>>();
    assert!(chats.is_empty());
}

/// Test duplicate member set is refused without a second chat
#[tokio::test]
async fn test_create_duplicate_chat_fails() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    create_chat(&server, &[&a, &b]).await;

    let response = server
        .post("/api/v1/chats")
        .json(&json!({ "name": "again", "members": [b.id, a.id] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let chats = server.get("/api/v1/chats").await.json::<Vec<ChatResponse>>();
    assert_eq!(chats.len(), 1);
}

/// Test a single member or malformed member id is a 400
#[tokio::test]
async fn test_create_chat_bad_members() {
    let server = test_server();
    let a = create_user(&server).await;

    server
        .post("/api/v1/chats")
        .json(&json!({ "members": [a.id] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/v1/chats")
        .json(&json!({ "members": [a.id, "not-an-id"] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Test listing chats by user and type
#[tokio::test]
async fn test_list_chats_by_user_and_type() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let c = create_user(&server).await;
    let d = create_user(&server).await;
    let private = create_chat(&server, &[&a, &b]).await;
    let group = create_chat(&server, &[&a, &b, &c]).await;
    create_chat(&server, &[&c, &d]).await;

    let for_a = server
        .get("/api/v1/chats")
        .add_query_param("user", &a.id)
        .await
        .json::<Vec<ChatResponse>>();
    assert_eq!(for_a, vec![private.clone(), group.clone()]);

    let groups = server
        .get("/api/v1/chats")
        .add_query_param("user", &a.id)
        .add_query_param("type", "group")
        .await
        .json::<Vec<ChatResponse>>();
    assert_eq!(groups, vec![group]);

    let both = server
        .get("/api/v1/chats")
        .add_query_param("user", format!("{},{}", a.id, b.id))
        .add_query_param("type", "private")
        .await
        .json::<Vec<ChatResponse>>();
    assert_eq!(both, vec![private]);
}

/// Test invalid list queries
#[tokio::test]
async fn test_list_chats_invalid_query() {
    let server = test_server();

    server
        .get("/api/v1/chats")
        .add_query_param("type", "channel")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/api/v1/chats")
        .add_query_param("user", "xyz")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/api/v1/chats")
        .add_query_param("user", unknown_id())
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test fetching a chat and its users
#[tokio::test]
async fn test_get_chat_and_users() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;

    let fetched = server
        .get(&format!("/api/v1/chats/{}", chat.id))
        .await
        .json::<ChatResponse>();
    assert_eq!(fetched, chat);

    let response = server.get(&format!("/api/v1/chats/{}/users", chat.id)).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<UserResponse>>(), vec![a, b]);

    server
        .get(&format!("/api/v1/chats/{}/users", unknown_id()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test adding members is a set union
#[tokio::test]
async fn test_add_members_is_idempotent() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let c = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;
    let path = format!("/api/v1/chats/{}/users", chat.id);

    let response = server.post(&path).json(&json!({ "users": [b.id, c.id] })).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<ChatResponse>().members,
        vec![a.id.clone(), b.id.clone(), c.id.clone()]
    );

    let again = server
        .post(&path)
        .json(&json!({ "users": [c.id] }))
        .await
        .json::<ChatResponse>();
    assert_eq!(again.members, vec![a.id, b.id, c.id]);
}

/// Test adding unknown users or none at all
#[tokio::test]
async fn test_add_members_errors() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;
    let path = format!("/api/v1/chats/{}/users", chat.id);

    server
        .post(&path)
        .json(&json!({ "users": [unknown_id()] }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post(&path)
        .json(&json!({ "users": [] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post(&format!("/api/v1/chats/{}/users", unknown_id()))
        .json(&json!({ "users": [a.id] }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test deleting a chat, then deleting it again
#[tokio::test]
async fn test_delete_chat() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;
    let path = format!("/api/v1/chats/{}", chat.id);

    let response = server.delete(&path).await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<String>(), "Deleted");

    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

/// Test deleting a chat that never existed
#[tokio::test]
async fn test_delete_nonexistent_chat() {
    let server = test_server();

    let response = server
        .delete(&format!("/api/v1/chats/{}", unknown_id()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
