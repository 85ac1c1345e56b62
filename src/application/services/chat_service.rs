//! Chat Service
//!
//! Chat creation, listing, membership and deletion. Every operation is a
//! sequence of independent repository calls; none of them is atomic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    dedup_ids, Chat, ChatFilter, ChatRepository, ChatType, Id, User, UserRepository,
};
use crate::shared::error::AppError;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create a chat between existing users
    async fn create_chat(&self, request: CreateChatDto) -> Result<Chat, ChatError>;

    /// Get chat by ID
    async fn get_chat(&self, chat_id: Id) -> Result<Chat, ChatError>;

    /// List chats containing all of `user_ids`, optionally of one type
    async fn list_chats(
        &self,
        user_ids: Vec<Id>,
        chat_type: Option<ChatType>,
    ) -> Result<Vec<Chat>, ChatError>;

    /// Users that are members of a chat
    async fn list_chat_users(&self, chat_id: Id) -> Result<Vec<User>, ChatError>;

    /// Add existing users to a chat
    async fn add_members(&self, chat_id: Id, user_ids: Vec<Id>) -> Result<Chat, ChatError>;

    /// Delete a chat, leaving its messages behind
    async fn delete_chat(&self, chat_id: Id) -> Result<(), ChatError>;
}

/// Create chat request
#[derive(Debug, Clone, Default)]
pub struct CreateChatDto {
    pub name: Option<String>,
    pub members: Vec<Id>,
}

/// Chat service errors
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat with id {0} not found")]
    NotFound(Id),

    #[error("User with id {0} not found")]
    UserNotFound(Id),

    #[error("Chat {0} already exists for these members")]
    AlreadyExists(Id),

    #[error("A chat needs at least two distinct members")]
    NotEnoughMembers,

    #[error("No users to add")]
    NoUsers,

    #[error("{0}")]
    Store(AppError),
}

impl From<ChatError> for AppError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::NotFound(_) | ChatError::UserNotFound(_) => {
                AppError::NotFound(error.to_string())
            }
            ChatError::AlreadyExists(_) => AppError::Conflict(error.to_string()),
            ChatError::NotEnoughMembers | ChatError::NoUsers => {
                AppError::BadRequest(error.to_string())
            }
            ChatError::Store(e) => e,
        }
    }
}

/// ChatService implementation
pub struct ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
{
    user_repo: Arc<U>,
    chat_repo: Arc<C>,
}

impl<U, C> ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, chat_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            chat_repo,
        }
    }

    /// Fail on the first identifier with no matching user.
    async fn ensure_users_exist(&self, user_ids: &[Id]) -> Result<(), ChatError> {
        for id in user_ids {
            self.user_repo
                .find_by_id(*id)
                .await
                .map_err(ChatError::Store)?
                .ok_or(ChatError::UserNotFound(*id))?;
        }
        Ok(())
    }

    async fn find_chat(&self, chat_id: Id) -> Result<Chat, ChatError> {
        self.chat_repo
            .find_by_id(chat_id)
            .await
            .map_err(ChatError::Store)?
            .ok_or(ChatError::NotFound(chat_id))
    }
}

#[async_trait]
impl<U, C> ChatService for ChatServiceImpl<U, C>
where
    U: UserRepository + ?Sized + 'static,
    C: ChatRepository + ?Sized + 'static,
{
    async fn create_chat(&self, request: CreateChatDto) -> Result<Chat, ChatError> {
        let members = dedup_ids(&request.members);
        if members.len() < 2 {
            return Err(ChatError::NotEnoughMembers);
        }

        self.ensure_users_exist(&members).await?;

        // Superset match: an existing larger chat also blocks creation.
        if let Some(existing) = self
            .chat_repo
            .find_by_members(&members)
            .await
            .map_err(ChatError::Store)?
        {
            return Err(ChatError::AlreadyExists(existing.id));
        }

        let chat = self
            .chat_repo
            .create(&Chat::new(request.name, members))
            .await
            .map_err(ChatError::Store)?;

        tracing::info!(
            chat_id = %chat.id,
            name = %chat.name,
            members = chat.members.len(),
            "Chat created"
        );
        Ok(chat)
    }

    async fn get_chat(&self, chat_id: Id) -> Result<Chat, ChatError> {
        self.find_chat(chat_id).await
    }

    async fn list_chats(
        &self,
        user_ids: Vec<Id>,
        chat_type: Option<ChatType>,
    ) -> Result<Vec<Chat>, ChatError> {
        let members = dedup_ids(&user_ids);
        self.ensure_users_exist(&members).await?;

        let filter = ChatFilter { members, chat_type };
        self.chat_repo.list(&filter).await.map_err(ChatError::Store)
    }

    async fn list_chat_users(&self, chat_id: Id) -> Result<Vec<User>, ChatError> {
        let chat = self.find_chat(chat_id).await?;

        self.user_repo
            .find_by_ids(&chat.members)
            .await
            .map_err(ChatError::Store)
    }

    async fn add_members(&self, chat_id: Id, user_ids: Vec<Id>) -> Result<Chat, ChatError> {
        let user_ids = dedup_ids(&user_ids);
        if user_ids.is_empty() {
            return Err(ChatError::NoUsers);
        }

        self.find_chat(chat_id).await?;
        self.ensure_users_exist(&user_ids).await?;

        let chat = self
            .chat_repo
            .add_members(chat_id, &user_ids)
            .await
            .map_err(ChatError::Store)?
            .ok_or(ChatError::NotFound(chat_id))?;

        tracing::info!(chat_id = %chat.id, members = chat.members.len(), "Chat members updated");
        Ok(chat)
    }

    async fn delete_chat(&self, chat_id: Id) -> Result<(), ChatError> {
        self.chat_repo.delete(chat_id).await.map_err(|e| match e {
            AppError::NotFound(_) => ChatError::NotFound(chat_id),
            e => ChatError::Store(e),
        })?;

        tracing::info!(chat_id = %chat_id, "Chat deleted");
        Ok(())
    }
}
