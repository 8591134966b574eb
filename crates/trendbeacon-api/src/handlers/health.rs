//! Health check endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// Seconds since startup
    pub uptime_seconds: u64,
    /// Whether client credentials are configured
    pub tiktok_configured: bool,
    /// Whether a token has been saved
    pub account_connected: bool,
}

/// Liveness plus a summary of the login state
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let account_connected = match state.tiktok.tokens().access_token().await {
        Ok(token) => token.is_some(),
        Err(e) => {
            warn!("Token file unreadable: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.uptime().as_secs(),
        tiktok_configured: state.config.tiktok.has_credentials(),
        account_connected,
    })
}
