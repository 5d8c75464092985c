//! HTTP front end for the summarizers
//!
//! - `POST /api/v1/summarize` summarize a document
//! - `GET  /v1/health` liveness check

pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod telemetry;

pub use config::{get_configuration, Settings};
pub use dispatch::{Dispatcher, SummaryTask, FAILURE_SENTINEL};
pub use error::ServerError;
pub use router::app;
pub use state::AppState;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Load settings from the environment and serve until shutdown
pub async fn run() -> Result<(), ServerError> {
    let settings = get_configuration()?;
    info!("Loaded settings");

    let state = AppState::from_settings(&settings)?;
    serve(&settings.bind_address(), state).await
}

/// Serve `state` on `address` until SIGINT or SIGTERM
pub async fn serve(address: &str, state: AppState) -> Result<(), ServerError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| ServerError::Bind {
            address: address.to_string(),
            source: e,
        })?;
    let local_addr = listener.local_addr()?;
    info!("Listening on {}", local_addr);
    info!("  - GET  /v1/health");
    info!("  - POST /api/v1/summarize");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
