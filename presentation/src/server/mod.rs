//! HTTP API
//!
//! | Method | Path      | Response                                   |
//! |--------|-----------|--------------------------------------------|
//! | GET    | `/`       | service banner                             |
//! | GET    | `/health` | `{"status": "ok"}`                         |
//! | POST   | `/search` | `{"answer": ..., "sources": [...]}`        |
//!
//! `POST /search` takes `{"query": "..."}`. A blank query is rejected
//! with 400 before the pipeline runs; every other request gets a
//! [`ResearchResult`](research_domain::ResearchResult).

mod handlers;

pub use handlers::{ErrorResponse, SearchRequest, StatusResponse};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use research_application::RunResearchUseCase;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    use_case: RunResearchUseCase,
}

/// Build the application router
pub fn create_router(use_case: RunResearchUseCase, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/search", post(handlers::search))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(AppState { use_case })
}

/// CORS policy: any origin when the list is empty or contains `"*"`
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Bind `addr` and serve until Ctrl+C or SIGTERM
pub async fn serve(
    use_case: RunResearchUseCase,
    addr: &str,
    allowed_origins: &[String],
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(use_case, allowed_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
