//! Document identifiers.
//!
//! Every entity is keyed by a MongoDB `ObjectId`. On the wire it travels as
//! its 24 character hex string.

use crate::shared::error::AppError;

/// Identifier of a user, chat or message.
pub type Id = mongodb::bson::oid::ObjectId;

/// Parse a hex identifier, naming `what` in the error.
pub fn parse_id(raw: &str, what: &str) -> Result<Id, AppError> {
    Id::parse_str(raw.trim())
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID: {}", what, raw)))
}

/// Parse a list of hex identifiers, failing on the first invalid one.
pub fn parse_ids<S: AsRef<str>>(raw: &[S], what: &str) -> Result<Vec<Id>, AppError> {
    raw.iter().map(|s| parse_id(s.as_ref(), what)).collect()
}

/// Remove repeated identifiers, keeping first occurrences in order.
pub fn dedup_ids(ids: &[Id]) -> Vec<Id> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
