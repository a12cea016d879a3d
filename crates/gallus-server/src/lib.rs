#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod error;

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};

// Tracing target constants for consistent logging.

/// Tracing target for authentication operations.
pub const TRACING_TARGET_AUTHENTICATION: &str = "gallus_server::authentication";
