//! HTTP greeting service.
//!
//! Serves a greeting with the host name and platform label on `/` and a
//! liveness stub on `/health`, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ServerError};

/// Creates the Axum application router.
///
/// Paths other than `/` and `/health` fall through to axum's default 404.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::greet))
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
}
