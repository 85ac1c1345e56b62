//! # Domain Entities
//!
//! Core domain entities. Each maps to one collection of the document store.
//!
//! - **User**: a chat participant
//! - **Chat**: a named set of users that messages are scoped to
//! - **Message**: text sent from one member of a chat to another
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod chat;
mod message;
mod user;

pub use chat::{Chat, ChatFilter, ChatRepository, DEFAULT_CHAT_NAME};
pub use message::{Message, MessageRepository, MAX_MESSAGE_LENGTH, MESSAGE_PAGE_LIMIT};
pub use user::{User, UserRepository, MAX_USER_NAME_LENGTH};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use user::MockUserRepository;
