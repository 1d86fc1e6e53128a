//! learngap-server: stateless HTTP API over the learngap core.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/analyze` | Score an assessment input |
//! | POST | `/convert` | Convert text into an accessible format |
//! | POST | `/analyze-text` | Heuristic analysis of uploaded notes |
//! | GET | `/questionnaires/:audience` | Question bank for teacher, parent, or student |

pub mod handlers;
pub mod response;
pub mod session;

use std::any::Any;
use std::sync::Arc;

use anyhow::Context;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use learngap_core::traits::TextClassifier;

pub use response::{ApiError, ApiResponse};
pub use session::Session;

/// Shared, read-only handler state.
#[derive(Clone, Default)]
pub struct AppState {
    /// Optional enrichment for `/analyze-text`.
    pub classifier: Option<Arc<dyn TextClassifier>>,
}

impl AppState {
    pub fn with_classifier(classifier: Arc<dyn TextClassifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/convert", post(handlers::convert))
        .route("/analyze-text", post(handlers::analyze_document))
        .route("/questionnaires/:audience", get(handlers::questionnaires))
        .with_state(state);

    with_middleware(routes)
}

/// Panic capture, request tracing, and permissive CORS.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    ApiError::Processing("Internal server error".to_string()).into_response()
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "learngap server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("learngap server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
