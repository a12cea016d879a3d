//! Enhanced HTTP request extractors.
//!
//! This module provides custom axum extractors that enhance the default
//! functionality with better error messages, validation, and authentication.
//!
//! # Extractor Categories
//!
//! ## Authentication
//!
//! - [`AuthHeader`] - Bearer session-token extraction and validation
//! - [`AuthClaims`] - Session claims carried inside tokens
//!
//! ## Request Data Extraction
//!
//! - [`Json`] - Enhanced JSON deserialization with better error messages
//! - [`ValidateJson`] - JSON extraction with automatic validation
//! - [`Path`] - Path parameter extraction with detailed error context

// Authentication
pub mod auth;

// Request data extraction
pub mod reject;

pub use crate::extract::auth::{AuthClaims, AuthHeader};
pub use crate::extract::reject::{Json, Path, ValidateJson};
