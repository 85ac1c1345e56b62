//! Response DTOs
//!
//! Data structures for API response bodies. Identifiers are rendered as hex
//! strings and timestamps as RFC 3339.

use serde::{Deserialize, Serialize};

use crate::domain::{Chat, Message, User};

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
        }
    }
}

/// Chat response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id.to_hex(),
            name: chat.name,
            members: chat.members.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

/// Message response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub receiver: String,
    pub chat: String,
    pub timestamp: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_hex(),
            text: message.text,
            sender: message.sender.to_hex(),
            receiver: message.receiver.to_hex(),
            chat: message.chat.to_hex(),
            timestamp: message.timestamp.to_rfc3339(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
