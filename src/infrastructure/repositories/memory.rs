//! In-Memory Repositories
//!
//! Process-local implementations of the repository traits. They follow the
//! same semantics as the MongoDB implementations (superset member matching,
//! set-union member additions, store-order message listing) and back the
//! test suite and the `memory` storage backend.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;

use crate::domain::{
    Chat, ChatFilter, ChatRepository, Id, Message, MessageRepository, User, UserRepository,
};
use crate::shared::error::AppError;

/// Users keyed by identifier.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Id, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[Id]) -> Result<Vec<User>, AppError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.users.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn create(&self, user: &User) -> Result<User, AppError> {
        if self.find_by_name(&user.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with name {} is already registered",
                user.name
            )));
        }

        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

/// Chats in insertion order.
#[derive(Default)]
pub struct InMemoryChatRepository {
    chats: RwLock<Vec<Chat>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chats.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.read().is_empty()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<Chat>, AppError> {
        Ok(self.chats.read().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_members(&self, ids: &[Id]) -> Result<Option<Chat>, AppError> {
        Ok(self
            .chats
            .read()
            .iter()
            .find(|c| c.contains_all(ids))
            .cloned())
    }

    async fn list(&self, filter: &ChatFilter) -> Result<Vec<Chat>, AppError> {
        Ok(self
            .chats
            .read()
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    async fn create(&self, chat: &Chat) -> Result<Chat, AppError> {
        self.chats.write().push(chat.clone());
        Ok(chat.clone())
    }

    async fn add_members(&self, id: Id, ids: &[Id]) -> Result<Option<Chat>, AppError> {
        let mut chats = self.chats.write();

        Ok(chats.iter_mut().find(|c| c.id == id).map(|chat| {
            chat.merge_members(ids);
            chat.clone()
        }))
    }

    async fn delete(&self, id: Id) -> Result<(), AppError> {
        let mut chats = self.chats.write();
        let before = chats.len();
        chats.retain(|c| c.id != id);

        if chats.len() == before {
            return Err(AppError::NotFound(format!("Chat with id {} not found", id)));
        }

        Ok(())
    }
}

/// Messages in insertion order.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: &Message) -> Result<Message, AppError> {
        self.messages.write().push(message.clone());
        Ok(message.clone())
    }

    async fn find_by_chat(&self, chat_id: Id, limit: usize) -> Result<Vec<Message>, AppError> {
        Ok(self
            .messages
            .read()
            .iter()
            .filter(|m| m.chat == chat_id)
            .take(limit)
            .cloned()
            .collect())
    }
}
