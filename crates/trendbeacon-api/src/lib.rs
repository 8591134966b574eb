//! `TrendBeacon` dashboard server library

#![forbid(unsafe_code)]

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use axum::http::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use trendbeacon_core::{Config, Result};

/// Build the router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the application state cannot be created.
pub fn build_router(config: Config) -> Result<Router> {
    let timeout = Duration::from_secs(config.server.request_timeout);
    let state = Arc::new(AppState::new(config)?);

    Ok(routes::build_router()
        .layer(axum::middleware::from_fn(
            middleware::request_logging_middleware,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state))
}
