//! Message API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chat_backend::application::dto::response::{MessageResponse, UserResponse};

use crate::common::{create_chat, create_user, test_server, unknown_id};

fn message_body(sender: &UserResponse, receiver: &UserResponse, text: &str) -> serde_json::Value {
    json!({ "sender": sender.id, "receiver": receiver.id, "text": text })
}

/// Test the full flow: users, chat, message, history
#[tokio::test]
async fn test_send_and_list_messages() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;

    let response = server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &b, "hi"))
        .await;

    response.assert_status(StatusCode::OK);
    let sent = response.json::<MessageResponse>();
    assert_eq!(sent.chat, chat.id);
    assert_eq!(sent.sender, a.id);
    assert_eq!(sent.receiver, b.id);

    let messages = server
        .get(&format!("/api/v1/chats/{}/messages", chat.id))
        .await
        .json::<Vec<MessageResponse>>();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "hi");
    assert_eq!(messages[0].chat, chat.id);
}

/// Test messages without a chat are refused and not stored
#[tokio::test]
async fn test_send_without_chat_fails() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let c = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &c]).await;

    let response = server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &b, "hi"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let messages = server
        .get(&format!("/api/v1/chats/{}/messages", chat.id))
        .await
        .json::<Vec<MessageResponse>>();
    assert!(messages.is_empty());
}

/// Test a user cannot message themselves, even inside a chat they belong to
#[tokio::test]
async fn test_send_to_self_fails() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;

    let response = server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &a, "hi"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<String>(),
        "Sender and receiver must be different users"
    );

    let messages = server
        .get(&format!("/api/v1/chats/{}/messages", chat.id))
        .await
        .json::<Vec<MessageResponse>>();
    assert!(messages.is_empty());
}

/// Test unknown sender or receiver
#[tokio::test]
async fn test_send_with_unknown_user_fails() {
    let server = test_server();
    let a = create_user(&server).await;
    let ghost = unknown_id();

    let response = server
        .post("/api/v1/chats/messages")
        .json(&json!({ "sender": a.id, "receiver": ghost, "text": "hi" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<String>(),
        format!("User with id {} not found", ghost)
    );
}

/// Test malformed message payloads
#[tokio::test]
async fn test_send_bad_payload() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    create_chat(&server, &[&a, &b]).await;

    server
        .post("/api/v1/chats/messages")
        .json(&json!({ "sender": a.id, "text": "hi" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &b, ""))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &a, "me"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Test history is capped at 20 messages
#[tokio::test]
async fn test_list_messages_returns_at_most_twenty() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;

    for i in 0..25 {
        server
            .post("/api/v1/chats/messages")
            .json(&message_body(&a, &b, &format!("message {}", i)))
            .await
            .assert_status(StatusCode::OK);
    }

    let messages = server
        .get(&format!("/api/v1/chats/{}/messages", chat.id))
        .await
        .json::<Vec<MessageResponse>>();

    assert_eq!(messages.len(), 20);
}

/// Test history of a missing chat
#[tokio::test]
async fn test_list_messages_of_missing_chat() {
    let server = test_server();

    server
        .get(&format!("/api/v1/chats/{}/messages", unknown_id()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test messages survive chat deletion but the history endpoint is gone
#[tokio::test]
async fn test_delete_chat_does_not_cascade() {
    let server = test_server();
    let a = create_user(&server).await;
    let b = create_user(&server).await;
    let chat = create_chat(&server, &[&a, &b]).await;
    server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &b, "hi"))
        .await
        .assert_status(StatusCode::OK);

    server
        .delete(&format!("/api/v1/chats/{}", chat.id))
        .await
        .assert_status(StatusCode::OK);

    server
        .get(&format!("/api/v1/chats/{}/messages", chat.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post("/api/v1/chats/messages")
        .json(&message_body(&a, &b, "still there?"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
