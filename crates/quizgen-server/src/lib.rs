//! quizgen-server library root.
//!
//! Exposes the router and its building blocks so integration tests can
//! drive the service without binding a socket.

use std::path::Path;

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
///
/// API routes live under `/api`; everything else is served from
/// `public_dir`. Only uploads pass through the rate limiter.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload = post(routes::upload::upload)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(axum_mw::from_fn_with_state(
            state.limiter.clone(),
            middleware::rate_limit::enforce,
        ));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/demo", get(routes::demo::demo))
        .route("/api/upload", upload)
        .route("/api/export", post(routes::export::export_text))
        .fallback_service(ServeDir::new(public_dir))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
