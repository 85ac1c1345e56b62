//! Chat Handlers

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::application::dto::request::{AddMembersRequest, CreateChatRequest, ListChatsQuery};
use crate::application::dto::response::{ChatResponse, UserResponse};
use crate::application::services::{ChatService, ChatServiceImpl, CreateChatDto};
use crate::domain::{parse_id, parse_ids, ChatRepository, ChatType, UserRepository};
use crate::presentation::http::extractors::{AppJson, AppPath, AppQuery};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn chat_service(state: &AppState) -> ChatServiceImpl<dyn UserRepository, dyn ChatRepository> {
    ChatServiceImpl::new(
        state.repositories.users.clone(),
        state.repositories.chats.clone(),
    )
}

/// Create a chat between existing users
pub async fn create_chat(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateChatRequest>,
) -> Result<(StatusCode, AppJson<ChatResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let request = CreateChatDto {
        name: body.name,
        members: parse_ids(&body.members, "member")?,
    };

    let chat = chat_service(&state).create_chat(request).await?;

    Ok((StatusCode::CREATED, AppJson(ChatResponse::from(chat))))
}

/// List chats, optionally by member and type
pub async fn list_chats(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListChatsQuery>,
) -> Result<AppJson<Vec<ChatResponse>>, AppError> {
    let user_ids = parse_ids(&query.user_ids(), "user")?;
    let chat_type = query
        .chat_type
        .as_deref()
        .map(str::parse::<ChatType>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let chats = chat_service(&state).list_chats(user_ids, chat_type).await?;

    Ok(AppJson(chats.into_iter().map(ChatResponse::from).collect()))
}

/// Get chat by ID
pub async fn get_chat(
    State(state): State<AppState>,
    AppPath(chat_id): AppPath<String>,
) -> Result<AppJson<ChatResponse>, AppError> {
    let chat_id = parse_id(&chat_id, "chat")?;

    let chat = chat_service(&state).get_chat(chat_id).await?;

    Ok(AppJson(ChatResponse::from(chat)))
}

/// Delete a chat
pub async fn delete_chat(
    State(state): State<AppState>,
    AppPath(chat_id): AppPath<String>,
) -> Result<AppJson<&'static str>, AppError> {
    let chat_id = parse_id(&chat_id, "chat")?;

    chat_service(&state).delete_chat(chat_id).await?;

    Ok(AppJson("Deleted"))
}

/// List the users of a chat
pub async fn get_chat_users(
    State(state): State<AppState>,
    AppPath(chat_id): AppPath<String>,
) -> Result<AppJson<Vec<UserResponse>>, AppError> {
    let chat_id = parse_id(&chat_id, "chat")?;

    let users = chat_service(&state).list_chat_users(chat_id).await?;

    Ok(AppJson(users.into_iter().map(UserResponse::from).collect()))
}

/// Add users to a chat
pub async fn add_chat_users(
    State(state): State<AppState>,
    AppPath(chat_id): AppPath<String>,
    AppJson(body): AppJson<AddMembersRequest>,
) -> Result<AppJson<ChatResponse>, AppError> {
    let chat_id = parse_id(&chat_id, "chat")?;
    body.validate().map_err(validation_error)?;
    let user_ids = parse_ids(&body.users, "user")?;

    let chat = chat_service(&state).add_members(chat_id, user_ids).await?;

    Ok(AppJson(ChatResponse::from(chat)))
}
