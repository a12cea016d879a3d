//! HTTP server startup and lifecycle management.

use axum::Router;

use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Starts the HTTP server and runs until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the listener cannot bind to the configured address
/// or the server encounters a fatal error during operation.
pub async fn serve(app: Router, config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %addr,
            error = %e,
            "failed to bind listener"
        );
        anyhow::anyhow!("failed to bind {addr}: {e}")
    })?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %addr,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // Signal handler installation failed; never resolve
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        "shutdown signal received, draining connections"
    );
}
