//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer, one per collection.
//!
//! ## Available Repositories
//!
//! - **MongoUserRepository** / **InMemoryUserRepository** - `users`
//! - **MongoChatRepository** / **InMemoryChatRepository** - `chats`
//! - **MongoMessageRepository** / **InMemoryMessageRepository** - `messages`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use chat_backend::infrastructure::{database, repositories::Repositories};
//!
//! async fn setup(settings: &DatabaseSettings) -> anyhow::Result<Repositories> {
//!     let db = database::connect(settings).await?;
//!     Ok(Repositories::mongo(&db))
//! }
//! ```

pub mod chat_repository;
pub mod memory;
pub mod message_repository;
pub mod user_repository;

use std::sync::Arc;

use mongodb::Database;

use crate::domain::{ChatRepository, MessageRepository, UserRepository};

pub use chat_repository::MongoChatRepository;
pub use memory::{InMemoryChatRepository, InMemoryMessageRepository, InMemoryUserRepository};
pub use message_repository::MongoMessageRepository;
pub use user_repository::MongoUserRepository;

/// The storage handles shared by every request.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub chats: Arc<dyn ChatRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl Repositories {
    /// Repositories backed by a MongoDB database.
    pub fn mongo(database: &Database) -> Self {
        Self {
            users: Arc::new(MongoUserRepository::new(database)),
            chats: Arc::new(MongoChatRepository::new(database)),
            messages: Arc::new(MongoMessageRepository::new(database)),
        }
    }

    /// Empty process-local repositories.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            chats: Arc::new(InMemoryChatRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
        }
    }
}
