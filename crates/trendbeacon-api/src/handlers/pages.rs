//! Dashboard document and its static assets

use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use trendbeacon_dashboard::{DASHBOARD_CSS, DASHBOARD_JS};

/// The dashboard, rendered once at startup
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.clone())
}

/// Page script
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}

/// Page stylesheet
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], DASHBOARD_CSS)
}
