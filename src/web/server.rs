//! HTTP server for anonboard.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::board::{BoardLimits, ThreadStore};
use crate::config::{Config, WebConfig};
use crate::Result;

use super::handlers::AppState;
use super::router::create_app;

/// Web server for the board API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(addr: SocketAddr, threads: ThreadStore, web_config: WebConfig) -> Self {
        Self {
            addr,
            app_state: Arc::new(AppState::new(threads)),
            web_config,
        }
    }

    /// Create a web server from the full configuration.
    ///
    /// Applies the configured board limits to the store.
    pub fn from_config(config: &Config, threads: ThreadStore) -> Result<Self> {
        let addr = config.server.bind_addr()?;
        let threads = threads.with_limits(BoardLimits::from(&config.board));
        Ok(Self::new(addr, threads, config.web.clone()))
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build the application router.
    pub fn router(&self) -> Router {
        create_app(Arc::clone(&self.app_state), &self.web_config)
    }

    /// Run the web server until Ctrl-C is received.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        self.run_until(shutdown_signal()).await
    }

    /// Run the web server until the given future completes.
    ///
    /// In-flight requests are allowed to finish before returning.
    pub async fn run_until<F>(self, shutdown: F) -> std::result::Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Web server stopped");
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
