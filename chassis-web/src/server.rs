//! HTTP serve loop.

use std::io;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::HttpConfig;

/// Binds the configured address and serves the router until the process
/// is shut down or the listener fails.
pub async fn serve(config: &HttpConfig, router: Router) -> io::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "Server started");
    axum::serve(listener, router).await?;
    info!("Server stopped");
    Ok(())
}
