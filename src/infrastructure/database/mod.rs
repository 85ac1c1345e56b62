//! Database Module
//!
//! MongoDB client setup. The client is opened once at startup and shared by
//! every repository; the driver pools connections internally.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::config::DatabaseSettings;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Collection holding chat documents
pub const CHATS_COLLECTION: &str = "chats";

/// Collection holding message documents
pub const MESSAGES_COLLECTION: &str = "messages";

/// Connect to MongoDB and return a handle to the configured database.
///
/// The server is pinged before returning so an unreachable database fails
/// startup instead of the first request.
pub async fn connect(settings: &DatabaseSettings) -> Result<Database, mongodb::error::Error> {
    let timeout = Duration::from_secs(settings.connect_timeout_secs);

    let mut options = ClientOptions::parse(&settings.url).await?;
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    let client = Client::with_options(options)?;
    let database = client.database(&settings.name);

    database.run_command(doc! { "ping": 1 }).await?;

    Ok(database)
}
