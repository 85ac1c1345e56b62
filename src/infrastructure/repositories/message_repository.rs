//! Message Repository Implementation
//!
//! MongoDB implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{self, doc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::{Id, Message, MessageRepository};
use crate::infrastructure::database::MESSAGES_COLLECTION;
use crate::infrastructure::metrics::observe_db;
use crate::shared::error::AppError;

/// Stored shape of a message.
///
/// The timestamp is a BSON date, so it is kept at millisecond precision.
#[derive(Debug, Serialize, Deserialize)]
struct MessageDocument {
    #[serde(rename = "_id")]
    id: Id,
    text: String,
    sender: Id,
    receiver: Id,
    chat: Id,
    timestamp: bson::DateTime,
}

impl MessageDocument {
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            text: self.text,
            sender: self.sender,
            receiver: self.receiver,
            chat: self.chat,
            timestamp: DateTime::<Utc>::from_timestamp_millis(self.timestamp.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}

impl From<&Message> for MessageDocument {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            sender: message.sender,
            receiver: message.receiver,
            chat: message.chat,
            timestamp: bson::DateTime::from_millis(message.timestamp.timestamp_millis()),
        }
    }
}

/// MongoDB message repository implementation.
#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MessageDocument>,
}

impl MongoMessageRepository {
    /// Create a new MongoMessageRepository on the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(MESSAGES_COLLECTION),
        }
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    async fn create(&self, message: &Message) -> Result<Message, AppError> {
        let document = MessageDocument::from(message);
        observe_db(
            "insert_one",
            MESSAGES_COLLECTION,
            self.collection.insert_one(&document),
        )
        .await?;

        Ok(document.into_message())
    }

    async fn find_by_chat(&self, chat_id: Id, limit: usize) -> Result<Vec<Message>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let documents: Vec<MessageDocument> = observe_db("find", MESSAGES_COLLECTION, async {
            self.collection
                .find(doc! { "chat": chat_id })
                .limit(limit)
                .await?
                .try_collect::<Vec<_>>()
                .await
        })
        .await?;

        Ok(documents.into_iter().map(MessageDocument::into_message).collect())
    }
}
