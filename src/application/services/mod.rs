//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User registration and lookup
//! - **ChatService**: Chat creation, listing, membership and deletion
//! - **MessageService**: Sending and listing messages

pub mod chat_service;
pub mod message_service;
pub mod user_service;

// Re-export user service types
pub use user_service::{UserError, UserService, UserServiceImpl};

// Re-export chat service types
pub use chat_service::{ChatError, ChatService, ChatServiceImpl, CreateChatDto};

// Re-export message service types
pub use message_service::{CreateMessageDto, MessageError, MessageService, MessageServiceImpl};
