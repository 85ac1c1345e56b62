//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - MongoDB connection management
//! - Repository implementations (MongoDB and in-memory)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
