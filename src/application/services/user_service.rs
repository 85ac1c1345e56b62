//! User Service
//!
//! Handles user registration and lookup.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Id, User, UserRepository, MAX_USER_NAME_LENGTH};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user under a unique name
    async fn create_user(&self, name: &str) -> Result<User, UserError>;

    /// Get user by ID
    async fn get_user(&self, user_id: Id) -> Result<User, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User with id {0} not found")]
    NotFound(Id),

    #[error("User with name {0} is already registered")]
    NameTaken(String),

    #[error("User name must be 1-{} characters", MAX_USER_NAME_LENGTH)]
    InvalidName,

    #[error("{0}")]
    Store(AppError),
}

impl From<UserError> for AppError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::NotFound(_) => AppError::NotFound(error.to_string()),
            UserError::NameTaken(_) => AppError::Conflict(error.to_string()),
            UserError::InvalidName => AppError::Validation(error.to_string()),
            UserError::Store(e) => e,
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    async fn create_user(&self, name: &str) -> Result<User, UserError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_USER_NAME_LENGTH {
            return Err(UserError::InvalidName);
        }

        // Check-then-insert: two concurrent registrations can both pass.
        if self
            .user_repo
            .find_by_name(name)
            .await
            .map_err(UserError::Store)?
            .is_some()
        {
            return Err(UserError::NameTaken(name.to_string()));
        }

        let user = self
            .user_repo
            .create(&User::new(name))
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => UserError::NameTaken(name.to_string()),
                e => UserError::Store(e),
            })?;

        tracing::info!(user_id = %user.id, name = %user.name, "User created");
        Ok(user)
    }

    async fn get_user(&self, user_id: Id) -> Result<User, UserError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(UserError::Store)?
            .ok_or(UserError::NotFound(user_id))
    }
}
