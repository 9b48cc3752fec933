use tokio::net::TcpListener;
use tracing::info;

use super::router::create_router;
use super::state::AppState;
use crate::error::AppError;

pub struct Server {
    state: AppState,
}

impl Server {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn start(self) -> Result<(), AppError> {
        let server_config = &self.state.config().server;
        let address = server_config.address();
        let port = server_config.port;

        info!("Starting classification server on {}", address);
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::Bind(e, port))?;

        let router = create_router(self.state.clone());
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(AppError::Server)?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => tracing::warn!("Failed to listen for shutdown signal: {}", e),
    }
}
