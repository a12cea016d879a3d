//! System health check handler.

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use crate::extract::Json;
use crate::service::ServiceState;

/// Response returned by the health check.
#[must_use]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    /// Whether the server is accepting requests.
    pub status: &'static str,
    /// Server version.
    pub version: &'static str,
}

/// Reports basic liveness.
async fn health_status() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}
