//! Message Service
//!
//! Sending messages between chat members and reading a chat's history.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    ChatRepository, Id, Message, MessageRepository, UserRepository, MAX_MESSAGE_LENGTH,
    MESSAGE_PAGE_LIMIT,
};
use crate::shared::error::AppError;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Send a message to the chat shared by sender and receiver
    async fn send_message(&self, request: CreateMessageDto) -> Result<Message, MessageError>;

    /// Get up to [`MESSAGE_PAGE_LIMIT`] messages of a chat
    async fn list_messages(&self, chat_id: Id) -> Result<Vec<Message>, MessageError>;
}

/// Create message request
#[derive(Debug, Clone)]
pub struct CreateMessageDto {
    pub sender: Id,
    pub receiver: Id,
    pub text: String,
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("User with id {0} not found")]
    UserNotFound(Id),

    #[error("Chat with id {0} not found")]
    ChatNotFound(Id),

    #[error("No chat between users {sender} and {receiver}")]
    NoChat { sender: Id, receiver: Id },

    #[error("Sender and receiver must be different users")]
    SameParticipant,

    #[error("Message text must be 1-{} characters", MAX_MESSAGE_LENGTH)]
    InvalidText,

    #[error("{0}")]
    Store(AppError),
}

impl From<MessageError> for AppError {
    fn from(error: MessageError) -> Self {
        match error {
            MessageError::UserNotFound(_)
            | MessageError::ChatNotFound(_)
            | MessageError::NoChat { .. } => AppError::NotFound(error.to_string()),
            MessageError::SameParticipant => AppError::BadRequest(error.to_string()),
            MessageError::InvalidText => AppError::Validation(error.to_string()),
            MessageError::Store(e) => e,
        }
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    user_repo: Arc<U>,
    chat_repo: Arc<C>,
    message_repo: Arc<M>,
}

impl<U, C, M> MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized,
    C: ChatRepository + ?Sized,
    M: MessageRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, chat_repo: Arc<C>, message_repo: Arc<M>) -> Self {
        Self {
            user_repo,
            chat_repo,
            message_repo,
        }
    }

    async fn ensure_user_exists(&self, user_id: Id) -> Result<(), MessageError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(MessageError::Store)?
            .ok_or(MessageError::UserNotFound(user_id))
            .map(|_| ())
    }
}

#[async_trait]
impl<U, C, M> MessageService for MessageServiceImpl<U, C, M>
where
    U: UserRepository + ?Sized + 'static,
    C: ChatRepository + ?Sized + 'static,
    M: MessageRepository + ?Sized + 'static,
{
    async fn send_message(&self, request: CreateMessageDto) -> Result<Message, MessageError> {
        if request.text.trim().is_empty() || request.text.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(MessageError::InvalidText);
        }
        if request.sender == request.receiver {
            return Err(MessageError::SameParticipant);
        }

        self.ensure_user_exists(request.sender).await?;
        self.ensure_user_exists(request.receiver).await?;

        // Messages never create chats. The lookup is a superset match, so a
        // group containing both users can be picked.
        let chat = self
            .chat_repo
            .find_by_members(&[request.sender, request.receiver])
            .await
            .map_err(MessageError::Store)?
            .ok_or(MessageError::NoChat {
                sender: request.sender,
                receiver: request.receiver,
            })?;

        let message = Message {
            id: Id::new(),
            text: request.text,
            sender: request.sender,
            receiver: request.receiver,
            chat: chat.id,
            timestamp: Utc::now(),
        };

        let created = self
            .message_repo
            .create(&message)
            .await
            .map_err(MessageError::Store)?;

        tracing::debug!(message_id = %created.id, chat_id = %created.chat, "Message stored");
        Ok(created)
    }

    async fn list_messages(&self, chat_id: Id) -> Result<Vec<Message>, MessageError> {
        self.chat_repo
            .find_by_id(chat_id)
            .await
            .map_err(MessageError::Store)?
            .ok_or(MessageError::ChatNotFound(chat_id))?;

        self.message_repo
            .find_by_chat(chat_id, MESSAGE_PAGE_LIMIT)
            .await
            .map_err(MessageError::Store)
    }
}
