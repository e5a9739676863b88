//! Axum server setup
//!
//! Router with the listing page and health check, tracing middleware, and
//! graceful shutdown on SIGTERM/Ctrl+C. The per-request database deadline
//! lives in the page handler so a timeout renders the same error page as any
//! other failure.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    Router::new()
        .merge(routes::page::router())
        .merge(routes::health::router())
        .with_state(state)
        .layer(middleware)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The database is not touched here; the pool opens on the first request.
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Starting roster on http://{}", config.bind_addr);
    info!("Database: {}", config.database_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
