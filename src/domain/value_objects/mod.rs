//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **Id**: document identifier shared by users, chats and messages
//! - **ChatType**: derived classification of a chat by its member count

mod chat_type;
mod id;

pub use chat_type::*;
pub use id::*;
