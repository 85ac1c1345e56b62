//! User entity and repository trait.
//!
//! Maps to the `users` collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Id;
use crate::shared::error::AppError;

/// Longest accepted user name, in characters.
pub const MAX_USER_NAME_LENGTH: usize = 64;

/// A chat participant.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
}

impl User {
    /// Create a user with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
        }
    }
}

/// Data access for users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by identifier.
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, AppError>;

    /// Find a user by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError>;

    /// Find all users whose identifier is in `ids`.
    async fn find_by_ids(&self, ids: &[Id]) -> Result<Vec<User>, AppError>;

    /// Persist a new user.
    ///
    /// Fails with `AppError::Conflict` when a user with the same name exists.
    /// The check and the insert are separate round trips.
    async fn create(&self, user: &User) -> Result<User, AppError>;
}
