//! Message entity and repository trait.
//!
//! Maps to the `messages` collection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Id;
use crate::shared::error::AppError;

/// Number of messages returned when listing a chat.
pub const MESSAGE_PAGE_LIMIT: usize = 20;

/// Longest accepted message text, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// A text message between two members of a chat.
///
/// Immutable once created. `timestamp` is assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Id,
    pub text: String,
    pub sender: Id,
    pub receiver: Id,
    pub chat: Id,
    pub timestamp: DateTime<Utc>,
}

/// Data access for messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message.
    async fn create(&self, message: &Message) -> Result<Message, AppError>;

    /// Up to `limit` messages of a chat in store order. No sort is applied.
    async fn find_by_chat(&self, chat_id: Id, limit: usize) -> Result<Vec<Message>, AppError>;
}
