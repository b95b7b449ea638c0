//! # Proxy Server
//!
//! Binds the listener, mounts the proxy routes, and serves until ctrl-c.

pub mod routes;

pub use routes::{router, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::Config;

/// Bind the configured port and serve the proxy until shutdown
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server is running on http://localhost:{}", config.port);
    serve_on(listener, config).await
}

/// Serve the proxy on an already-bound listener
///
/// Split from [`serve`] so tests can bind an ephemeral port first.
pub async fn serve_on(listener: TcpListener, config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("failed to build HTTP client")?;

    let state = Arc::new(AppState { client, config });
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
    }
}
