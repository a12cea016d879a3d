//! Middleware for `axum::Router` and HTTP request processing.

mod auth;

pub use auth::require_authentication;

// Tracing target constants for consistent logging.
pub const TRACING_TARGET_AUTH: &str = "gallus_server::middleware::auth";
