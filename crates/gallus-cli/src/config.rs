//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::{Args, Parser};
use gallus_server::service::ServiceConfig;

/// Gallus HTTP API server.
#[derive(Debug, Parser)]
#[command(name = "gallus", version, about)]
pub struct Cli {
    /// Service state configuration (database, session secret).
    #[command(flatten)]
    pub service: ServiceConfig,

    /// HTTP server configuration.
    #[command(flatten)]
    pub server: ServerConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the server to.
    #[arg(long, env = "PORT", default_value = "8080")]
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {addr}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_parses() {
        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        };
        assert_eq!(
            config.socket_addr().unwrap().to_string(),
            "127.0.0.1:8080"
        );
    }

    #[test]
    fn socket_addr_rejects_garbage() {
        let config = ServerConfig {
            host: "not a host".to_owned(),
            port: 8080,
        };
        assert!(config.socket_addr().is_err());
    }
}
