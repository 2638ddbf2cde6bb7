mod handlers;
mod routes;
mod state;
mod views;

pub use routes::build_router;
pub use state::AppState;

use std::sync::Arc;

use shared::config::Config;
use tracing::info;

use crate::api::CacheApi;

/// Serve the admin page until Ctrl+C or SIGTERM
pub async fn serve(config: &Config, api: Arc<dyn CacheApi>) -> std::io::Result<()> {
    let router = build_router(AppState::new(api));

    let address = config.web_bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("Admin page listening on http://{}", address);
    info!("Cache API at {}", config.api_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Admin page shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
