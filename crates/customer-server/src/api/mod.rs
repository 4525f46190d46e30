//! HTTP surface: router assembly and server lifecycle

pub mod response;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, time::Duration};
use tokio::signal;
use tracing::info;

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::features;
use crate::middleware;
use crate::store::{self, SharedStore};

/// Connect the store, bind the listener and serve until a shutdown signal
///
/// After the signal, in-flight requests get `shutdown_timeout_secs` to
/// finish before the remaining connections are dropped.
pub async fn serve(config: Config) -> ServerResult<()> {
    let store = store::connect(&config).await?;
    let app = create_router(store, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid listen address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(());
    });
    let mut server = tokio::spawn(async move { server.await });

    tokio::select! {
        finished = &mut server => return join_server(finished),
        _ = signal_rx => {},
    }

    let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    info!("Waiting up to {} seconds for connections to close", timeout.as_secs());

    match tokio::time::timeout(timeout, &mut server).await {
        Ok(finished) => join_server(finished)?,
        Err(_) => {
            tracing::warn!("Shutdown timeout elapsed, dropping open connections");
            server.abort();
        },
    }

    info!("Server shut down gracefully");

    Ok(())
}

fn join_server(
    finished: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> ServerResult<()> {
    finished.map_err(|e| ServerError::Io(std::io::Error::other(e)))??;
    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(store: SharedStore, config: &Config) -> Router {
    let feature_state = features::FeatureState {
        store: store.clone(),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(store)
        .nest("/api/v1", features::router(feature_state))
        // Apply layers from innermost to outermost
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Customer Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Health check handler
async fn health_check(State(store): State<SharedStore>) -> Response {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Store health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "store": "unreachable"
                })),
            )
                .into_response()
        },
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
