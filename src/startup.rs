//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{middleware, Router};
use tokio::net::TcpListener;

use crate::config::{Settings, StorageBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::Repositories;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging, request_timeout};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repositories: Repositories,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(repositories: Repositories, settings: Settings) -> Self {
        Self {
            repositories,
            settings: Arc::new(settings),
        }
    }

    /// Open the configured storage backend.
    ///
    /// For MongoDB this connects and pings once; failure here aborts startup.
    pub async fn connect(settings: Settings) -> Result<Self> {
        let repositories = match settings.database.backend {
            StorageBackend::Mongodb => {
                let db = database::connect(&settings.database).await?;
                tracing::info!(database = %settings.database.name, "MongoDB connection established");
                Repositories::mongo(&db)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Repositories::in_memory()
            }
        };

        Ok(Self::new(repositories, settings))
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.settings.server.request_timeout_secs);
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(middleware::from_fn_with_state(timeout, request_timeout))
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let addr: SocketAddr = settings.server_addr().parse()?;

        let state = AppState::connect(settings).await?;
        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
