//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod timeout;

pub use metrics::track_metrics;
pub use timeout::request_timeout;
