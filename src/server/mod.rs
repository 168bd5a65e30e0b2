//! HTTP surface: router, shared state and handlers.

mod error;
mod handlers;

pub use error::{ApiError, NO_CACHE_CONTROL, PUBLIC_CACHE_CONTROL};

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::core::QuoteSummaryService;

/// State shared by every handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<dyn QuoteSummaryService>,
}

impl AppState {
    pub fn new(summaries: impl QuoteSummaryService + 'static) -> Self {
        Self {
            summaries: Arc::new(summaries),
        }
    }
}

/// Builds the application router. Anything not routed here answers 404,
/// including other methods on known paths.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .route(
            "/query",
            get(handlers::missing_symbol).fallback(handlers::not_found),
        )
        .route(
            "/query/",
            get(handlers::missing_symbol).fallback(handlers::not_found),
        )
        .route(
            "/query/:symbol",
            get(handlers::query).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
