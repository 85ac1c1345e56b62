//! Chat classification.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of chat, derived from how many members it has.
///
/// Not persisted: a chat becomes a group as soon as a third member is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// Exactly two members
    Private,
    /// More than two members
    Group,
}

impl ChatType {
    /// Classify a chat by its member count.
    pub fn of_member_count(count: usize) -> Self {
        if count > 2 {
            Self::Group
        } else {
            Self::Private
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Group => "group",
        }
    }

    /// Whether a chat with `count` members is of this type.
    pub fn matches(&self, count: usize) -> bool {
        match self {
            Self::Private => count == 2,
            Self::Group => count > 2,
        }
    }
}

impl FromStr for ChatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "group" => Ok(Self::Group),
            other => Err(format!("Unknown chat type: {}", other)),
        }
    }
}

impl std::fmt::Display for ChatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
