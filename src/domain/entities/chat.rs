//! Chat entity and repository trait.
//!
//! Maps to the `chats` collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ChatType, Id};
use crate::shared::error::AppError;

/// Name given to chats created without one.
pub const DEFAULT_CHAT_NAME: &str = "private";

/// A group of users that messages are scoped to.
///
/// `members` has set semantics: no identifier appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: Id,
    pub name: String,
    pub members: Vec<Id>,
}

impl Chat {
    /// Create a chat with a freshly generated identifier.
    ///
    /// An empty or blank name falls back to [`DEFAULT_CHAT_NAME`].
    pub fn new(name: Option<String>, members: Vec<Id>) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_NAME.to_string());

        Self {
            id: Id::new(),
            name,
            members,
        }
    }

    pub fn chat_type(&self) -> ChatType {
        ChatType::of_member_count(self.members.len())
    }

    pub fn has_member(&self, user_id: &Id) -> bool {
        self.members.contains(user_id)
    }

    /// Whether every identifier in `ids` is a member.
    pub fn contains_all(&self, ids: &[Id]) -> bool {
        ids.iter().all(|id| self.has_member(id))
    }

    /// Set-union `ids` into the member list, keeping existing order.
    pub fn merge_members(&mut self, ids: &[Id]) {
        for id in ids {
            if !self.has_member(id) {
                self.members.push(*id);
            }
        }
    }
}

/// Criteria for listing chats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatFilter {
    /// Only chats whose members include all of these users
    pub members: Vec<Id>,
    /// Only chats of this type
    pub chat_type: Option<ChatType>,
}

impl ChatFilter {
    pub fn matches(&self, chat: &Chat) -> bool {
        chat.contains_all(&self.members)
            && self
                .chat_type
                .map_or(true, |t| t.matches(chat.members.len()))
    }
}

/// Data access for chats.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Find a chat by identifier.
    async fn find_by_id(&self, id: Id) -> Result<Option<Chat>, AppError>;

    /// Find the first chat whose members are a superset of `ids`.
    ///
    /// This is not an exact-set match: a group chat containing both users of
    /// a pair satisfies a lookup for that pair.
    async fn find_by_members(&self, ids: &[Id]) -> Result<Option<Chat>, AppError>;

    /// List chats matching `filter`.
    async fn list(&self, filter: &ChatFilter) -> Result<Vec<Chat>, AppError>;

    /// Persist a new chat.
    async fn create(&self, chat: &Chat) -> Result<Chat, AppError>;

    /// Union `ids` into the chat's members. Returns `None` if the chat is gone.
    async fn add_members(&self, id: Id, ids: &[Id]) -> Result<Option<Chat>, AppError>;

    /// Delete a chat. Fails with `AppError::NotFound` if nothing was removed.
    ///
    /// Messages of the chat are left in place.
    async fn delete(&self, id: Id) -> Result<(), AppError>;
}
