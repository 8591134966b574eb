//! JSON views of what the dashboard page embeds

use crate::state::AppState;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use trendbeacon_dashboard::{ChartConfig, TrendFragments};

/// Chart configuration the page boots with
pub async fn chart(State(state): State<Arc<AppState>>) -> Json<ChartConfig> {
    Json(state.page.chart().clone())
}

/// Rendered hashtag and sound lists keyed by container id
pub async fn trends(State(state): State<Arc<AppState>>) -> Json<TrendFragments> {
    Json(state.page.trends().fragments())
}
