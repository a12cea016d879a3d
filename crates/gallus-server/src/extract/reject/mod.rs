//! Enhanced request extractors with improved error handling.
//!
//! Drop-in replacements for the standard axum extractors that convert
//! rejections into the handler [`Error`] type so every failure renders as a
//! structured [`ErrorResponse`] body.
//!
//! [`Error`]: crate::handler::Error
//! [`ErrorResponse`]: crate::handler::response::ErrorResponse

mod enhanced_json;
mod enhanced_path;
mod validated_json;

pub use enhanced_json::Json;
pub use enhanced_path::Path;
pub use validated_json::ValidateJson;
