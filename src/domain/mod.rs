//! # Domain Layer
//!
//! Entities, value objects and the repository traits the storage layer
//! implements. Independent of HTTP and of the concrete database.
//!
//! - **entities**: User, Chat, Message and their repositories
//! - **value_objects**: identifiers and chat classification

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
