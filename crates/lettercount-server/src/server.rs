//! Server runtime.

use crate::config::RelayConfig;
use axum::Router;
use std::{fmt, io};
use tokio::net::TcpListener;

/// Error type for server operations.
#[derive(Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    Bind(io::Error),
    /// Server runtime error.
    Runtime(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "Failed to bind to address: {}", e),
            Self::Runtime(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(e) | Self::Runtime(e) => Some(e),
        }
    }
}

/// Bind the configured address and serve the router to completion.
///
/// There is no shutdown wiring; the process serves until it is killed.
pub async fn serve(router: Router, config: &RelayConfig) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await.map_err(ServerError::Bind)?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(ServerError::Runtime)
}
