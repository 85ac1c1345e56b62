//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Identifiers
//! arrive as hex strings and are parsed by the handlers.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::MAX_USER_NAME_LENGTH;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_user_name"))]
    pub name: String,
}

/// Names are stored trimmed, so the length bound applies after trimming.
fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if length == 0 || length > MAX_USER_NAME_LENGTH {
        return Err(ValidationError::new("length").with_message(
            format!("Name must be 1-{} characters", MAX_USER_NAME_LENGTH).into(),
        ));
    }
    Ok(())
}

/// Create chat request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 2, message = "A chat needs at least two members"))]
    pub members: Vec<String>,
}

/// Send message request
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub sender: String,

    pub receiver: String,

    #[validate(length(min = 1, max = 4000, message = "Text must be 1-4000 characters"))]
    pub text: String,
}

/// Add chat members request
#[derive(Debug, Deserialize, Validate)]
pub struct AddMembersRequest {
    #[validate(length(min = 1, message = "At least one user is required"))]
    pub users: Vec<String>,
}

/// Chat listing query: `?user=<id>[,<id>...]&type=private|group`
#[derive(Debug, Default, Deserialize)]
pub struct ListChatsQuery {
    pub user: Option<String>,

    #[serde(rename = "type")]
    pub chat_type: Option<String>,
}

impl ListChatsQuery {
    /// Non-empty entries of the comma-separated `user` parameter.
    pub fn user_ids(&self) -> Vec<&str> {
        self.user
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ids_splits_commas() {
        let query = ListChatsQuery {
            user: Some("a, b,,c ".into()),
            chat_type: None,
        };
        assert_eq!(query.user_ids(), vec!["a", "b", "c"]);
        assert!(ListChatsQuery::default().user_ids().is_empty());
    }

    #[test]
    fn test_user_name_length_applies_after_trim() {
        let padded = CreateUserRequest {
            name: format!("  {}  ", "a".repeat(MAX_USER_NAME_LENGTH)),
        };
        assert!(padded.validate().is_ok());

        let blank = CreateUserRequest { name: "   ".into() };
        assert!(blank.validate().is_err());

        let long = CreateUserRequest {
            name: "a".repeat(MAX_USER_NAME_LENGTH + 1),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_create_chat_request_requires_two_members() {
        let request: CreateChatRequest =
            serde_json::from_str(r#"{"members":["only-one"]}"#).unwrap();
        assert!(request.name.is_none());
        assert!(request.validate().is_err());
    }
}
