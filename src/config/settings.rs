//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port, timeouts)
    pub server: ServerSettings,

    /// Storage configuration (MongoDB or in-memory)
    pub database: DatabaseSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Upper bound on the time spent handling a single request, in seconds
    pub request_timeout_secs: u64,
}

/// Which storage implementation backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// MongoDB document store
    Mongodb,
    /// Process-local store, lost on restart
    Memory,
}

/// Document database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Storage backend selection
    pub backend: StorageBackend,

    /// MongoDB connection URI
    pub url: String,

    /// Database holding the `users`, `chats` and `messages` collections
    pub name: String,

    /// Server selection / connect timeout in seconds
    pub connect_timeout_secs: u64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::builder(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(Self::environment())
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?
            .set_override_option("database.backend", std::env::var("STORAGE_BACKEND").ok())?
            .build()?
            .try_deserialize()
    }

    /// Settings built from defaults only, with the in-memory store.
    ///
    /// Used by tests and local tooling that must not touch files or the
    /// process environment.
    pub fn in_memory() -> Result<Self, ConfigError> {
        Self::builder("test")?
            .set_override("database.backend", "memory")?
            .set_override("server.port", 0)?
            .build()?
            .try_deserialize()
    }

    /// `APP__SERVER__PORT=8080` sets `server.port`. List values are
    /// comma-separated: `APP__CORS__ALLOWED_ORIGINS=https://a,https://b`.
    fn environment() -> Environment {
        Environment::default()
            .prefix("APP")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.request_timeout_secs", 15)?
            .set_default("database.backend", "mongodb")?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "chat")?
            .set_default("database.connect_timeout_secs", 10)?
            .set_default("cors.allowed_origins", Vec::<String>::new())
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
