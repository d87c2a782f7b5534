use std::sync::Arc;

use bookchain::Ledger;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Shared state passed to handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub pretty_json: bool,
}

/// Bookchain HTTP server.
pub struct BookchainServer {
    config: ServerConfig,
    state: AppState,
}

impl BookchainServer {
    /// Create a server with a fresh ledger.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let ledger = Ledger::new(config.ledger.clone())?;
        Ok(Self::with_ledger(config, Arc::new(ledger)))
    }

    /// Create a server around an existing ledger handle.
    pub fn with_ledger(config: ServerConfig, ledger: Arc<Ledger>) -> Self {
        let state = AppState {
            ledger,
            pretty_json: config.pretty_json,
        };
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.state.ledger
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Log every block currently in the chain.
    pub fn log_chain(&self) -> ServerResult<()> {
        for block in self.state.ledger.list_blocks()? {
            tracing::info!(
                position = block.position(),
                prev_hash = %block.prev_hash(),
                hash = %block.hash(),
                data = ?block.payload(),
                "block"
            );
        }
        Ok(())
    }

    /// Start serving requests until ctrl-c.
    pub async fn serve(self) -> ServerResult<()> {
        self.log_chain()?;
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("bookchain listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = BookchainServer::new(ServerConfig::default()).unwrap();
        assert_eq!(server.config().bind_addr, "0.0.0.0:8090".parse().unwrap());
        assert_eq!(server.ledger().len().unwrap(), 1);
    }

    #[test]
    fn router_builds() {
        let server = BookchainServer::new(ServerConfig::default()).unwrap();
        let _router = server.router();
        assert!(server.log_chain().is_ok());
    }
}
