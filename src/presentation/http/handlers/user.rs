//! User Handlers

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::application::dto::request::CreateUserRequest;
use crate::application::dto::response::UserResponse;
use crate::application::services::{UserService, UserServiceImpl};
use crate::domain::{parse_id, UserRepository};
use crate::presentation::http::extractors::{AppJson, AppPath};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn user_service(state: &AppState) -> UserServiceImpl<dyn UserRepository> {
    UserServiceImpl::new(state.repositories.users.clone())
}

/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, AppJson<UserResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let user = user_service(&state).create_user(&body.name).await?;

    Ok((StatusCode::CREATED, AppJson(UserResponse::from(user))))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user_id = parse_id(&user_id, "user")?;

    let user = user_service(&state).get_user(user_id).await?;

    Ok(AppJson(UserResponse::from(user)))
}
