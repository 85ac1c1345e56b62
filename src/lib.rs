//! # Chat Backend Library
//!
//! A REST backend for users, chats and messages:
//! - JSON-over-HTTP API (axum)
//! - MongoDB document storage, with an in-memory store for tests
//! - Prometheus metrics and structured logging
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, value objects and repository traits
//! - **Application Layer**: Services implementing the chat rules, and DTOs
//! - **Infrastructure Layer**: MongoDB and in-memory repositories, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_backend/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
