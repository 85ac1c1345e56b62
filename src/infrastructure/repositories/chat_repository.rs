//! Chat Repository Implementation
//!
//! MongoDB implementation of the ChatRepository trait.
//!
//! Member lookups use `$all`, so they match any chat whose member array is a
//! superset of the requested identifiers. Member additions use `$addToSet`
//! with `$each`, so an identifier already present is not stored twice.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::{Chat, ChatFilter, ChatRepository, ChatType, Id};
use crate::infrastructure::database::CHATS_COLLECTION;
use crate::infrastructure::metrics::observe_db;
use crate::shared::error::AppError;

/// Stored shape of a chat.
#[derive(Debug, Serialize, Deserialize)]
struct ChatDocument {
    #[serde(rename = "_id")]
    id: Id,
    name: String,
    #[serde(default)]
    members: Vec<Id>,
}

impl ChatDocument {
    fn into_chat(self) -> Chat {
        Chat {
            id: self.id,
            name: self.name,
            members: self.members,
        }
    }
}

impl From<&Chat> for ChatDocument {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id,
            name: chat.name.clone(),
            members: chat.members.clone(),
        }
    }
}

/// Build the query document for a chat listing.
fn filter_document(filter: &ChatFilter) -> Document {
    let mut query = Document::new();
    let mut members = Document::new();

    if !filter.members.is_empty() {
        members.insert("$all", filter.members.clone());
    }

    match filter.chat_type {
        Some(ChatType::Private) => {
            members.insert("$size", 2);
        }
        // A third element exists only when there are more than two members.
        Some(ChatType::Group) => {
            query.insert("members.2", doc! { "$exists": true });
        }
        None => {}
    }

    if !members.is_empty() {
        query.insert("members", members);
    }

    query
}

/// MongoDB chat repository implementation.
#[derive(Clone)]
pub struct MongoChatRepository {
    collection: Collection<ChatDocument>,
}

impl MongoChatRepository {
    /// Create a new MongoChatRepository on the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(CHATS_COLLECTION),
        }
    }
}

#[async_trait]
impl ChatRepository for MongoChatRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<Chat>, AppError> {
        let document = observe_db(
            "find_one",
            CHATS_COLLECTION,
            self.collection.find_one(doc! { "_id": id }),
        )
        .await?;

        Ok(document.map(ChatDocument::into_chat))
    }

    async fn find_by_members(&self, ids: &[Id]) -> Result<Option<Chat>, AppError> {
        let ids: Vec<Id> = ids.to_vec();

        let document = observe_db(
            "find_one",
            CHATS_COLLECTION,
            self.collection
                .find_one(doc! { "members": { "$all": ids } }),
        )
        .await?;

        Ok(document.map(ChatDocument::into_chat))
    }

    async fn list(&self, filter: &ChatFilter) -> Result<Vec<Chat>, AppError> {
        let query = filter_document(filter);

        let documents: Vec<ChatDocument> = observe_db("find", CHATS_COLLECTION, async {
            self.collection.find(query).await?.try_collect::<Vec<_>>().await
        })
        .await?;

        Ok(documents.into_iter().map(ChatDocument::into_chat).collect())
    }

    async fn create(&self, chat: &Chat) -> Result<Chat, AppError> {
        let document = ChatDocument::from(chat);
        observe_db(
            "insert_one",
            CHATS_COLLECTION,
            self.collection.insert_one(&document),
        )
        .await?;

        Ok(document.into_chat())
    }

    async fn add_members(&self, id: Id, ids: &[Id]) -> Result<Option<Chat>, AppError> {
        let ids: Vec<Id> = ids.to_vec();

        let document = observe_db(
            "find_one_and_update",
            CHATS_COLLECTION,
            self.collection
                .find_one_and_update(
                    doc! { "_id": id },
                    doc! { "$addToSet": { "members": { "$each": ids } } },
                )
                .return_document(ReturnDocument::After),
        )
        .await?;

        Ok(document.map(ChatDocument::into_chat))
    }

    async fn delete(&self, id: Id) -> Result<(), AppError> {
        let result = observe_db(
            "delete_one",
            CHATS_COLLECTION,
            self.collection.delete_one(doc! { "_id": id }),
        )
        .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Chat with id {} not found", id)));
        }

        Ok(())
    }
}
