//! User Repository Implementation
//!
//! MongoDB implementation of the UserRepository trait.
//! Maps between the `users` collection and the domain User entity.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::{Id, User, UserRepository};
use crate::infrastructure::database::USERS_COLLECTION;
use crate::infrastructure::metrics::observe_db;
use crate::shared::error::AppError;

/// Stored shape of a user.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: Id,
    name: String,
}

impl UserDocument {
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
        }
    }
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// MongoDB user repository implementation.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository on the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, AppError> {
        let document = observe_db(
            "find_one",
            USERS_COLLECTION,
            self.collection.find_one(doc! { "_id": id }),
        )
        .await?;

        Ok(document.map(UserDocument::into_user))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let document = observe_db(
            "find_one",
            USERS_COLLECTION,
            self.collection.find_one(doc! { "name": name }),
        )
        .await?;

        Ok(document.map(UserDocument::into_user))
    }

    async fn find_by_ids(&self, ids: &[Id]) -> Result<Vec<User>, AppError> {
        let ids: Vec<Id> = ids.to_vec();

        let documents: Vec<UserDocument> = observe_db("find", USERS_COLLECTION, async {
            self.collection
                .find(doc! { "_id": { "$in": ids } })
                .await?
                .try_collect::<Vec<_>>()
                .await
        })
        .await?;

        Ok(documents.into_iter().map(UserDocument::into_user).collect())
    }

    async fn create(&self, user: &User) -> Result<User, AppError> {
        if self.find_by_name(&user.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User with name {} is already registered",
                user.name
            )));
        }

        let document = UserDocument::from(user);
        observe_db(
            "insert_one",
            USERS_COLLECTION,
            self.collection.insert_one(&document),
        )
        .await?;

        Ok(document.into_user())
    }
}
