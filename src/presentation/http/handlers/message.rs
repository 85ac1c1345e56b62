//! Message Handlers

use axum::extract::State;
use validator::Validate;

use crate::application::dto::request::SendMessageRequest;
use crate::application::dto::response::MessageResponse;
use crate::application::services::{CreateMessageDto, MessageService, MessageServiceImpl};
use crate::domain::{parse_id, ChatRepository, MessageRepository, UserRepository};
use crate::presentation::http::extractors::{AppJson, AppPath};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn message_service(
    state: &AppState,
) -> MessageServiceImpl<dyn UserRepository, dyn ChatRepository, dyn MessageRepository> {
    MessageServiceImpl::new(
        state.repositories.users.clone(),
        state.repositories.chats.clone(),
        state.repositories.messages.clone(),
    )
}

/// Get up to 20 messages of a chat
pub async fn get_messages(
    State(state): State<AppState>,
    AppPath(chat_id): AppPath<String>,
) -> Result<AppJson<Vec<MessageResponse>>, AppError> {
    let chat_id = parse_id(&chat_id, "chat")?;

    let messages = message_service(&state).list_messages(chat_id).await?;

    Ok(AppJson(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Send a message to the chat shared by sender and receiver
pub async fn send_message(
    State(state): State<AppState>,
    AppJson(body): AppJson<SendMessageRequest>,
) -> Result<AppJson<MessageResponse>, AppError> {
    body.validate().map_err(validation_error)?;

    let request = CreateMessageDto {
        sender: parse_id(&body.sender, "sender")?,
        receiver: parse_id(&body.receiver, "receiver")?,
        text: body.text,
    };

    let message = message_service(&state).send_message(request).await?;

    Ok(AppJson(MessageResponse::from(message)))
}
