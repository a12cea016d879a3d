//! Authentication module.
//!
//! This module provides session-token handling for the Gallus API: the
//! [`AuthClaims`] structure carried inside signed tokens, and the
//! [`AuthHeader`] extractor that validates `Authorization: Bearer` headers
//! on protected routes.

mod jwt_header;

pub use self::jwt_header::{AuthClaims, AuthHeader};
