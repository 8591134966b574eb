//! Route definitions

use crate::{handlers, middleware::allow_any_origin, state::AppState};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use trendbeacon_dashboard::page::{SCRIPT_PATH, STYLESHEET_PATH};

/// Dashboard document and assets
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::pages::dashboard))
        .route(handlers::auth::DASHBOARD_PATH, get(handlers::pages::dashboard))
        .route(SCRIPT_PATH, get(handlers::pages::script))
        .route(STYLESHEET_PATH, get(handlers::pages::stylesheet))
        .layer(CompressionLayer::new())
}

/// OAuth login and callback
pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(handlers::auth::login))
        .route("/callback", get(handlers::auth::callback))
}

/// JSON API, readable from any origin
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/data", get(handlers::data::account_data))
        .route("/api/user", get(handlers::data::user_info))
        .route("/api/videos", get(handlers::data::videos))
        .route("/api/chart", get(handlers::dashboard::chart))
        .route("/api/trends", get(handlers::dashboard::trends))
        .layer(middleware::from_fn(allow_any_origin))
        .layer(CompressionLayer::new())
}

/// Health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(api_routes())
        .merge(health_routes())
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> handlers::ApiError {
    handlers::ApiError::new(
        axum::http::StatusCode::NOT_FOUND,
        "Not Found",
        "ROUTE_NOT_FOUND",
    )
    .with_details(serde_json::json!("The requested endpoint does not exist"))
}
