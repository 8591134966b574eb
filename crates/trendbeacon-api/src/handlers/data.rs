//! Account data passed through from TikTok

use crate::handlers::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use trendbeacon_tiktok::{AccountData, MAX_VIDEO_PAGE};
use validator::Validate;

/// Query parameters for the video list
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VideoListQuery {
    /// Pagination cursor returned by the previous page
    pub cursor: Option<u64>,

    /// Videos per page
    #[validate(range(min = 1, max = 20))]
    pub max_count: Option<u32>,
}

/// Profile, first video page and follower growth
///
/// # Errors
///
/// 502 if TikTok is unreachable or answers with something other than JSON,
/// 500 if the token or history file cannot be used.
pub async fn account_data(State(state): State<Arc<AppState>>) -> Result<Json<AccountData>, ApiError> {
    info!("Fetching combined account data");
    Ok(Json(state.tiktok.all_data().await?))
}

/// Profile of the connected account
///
/// # Errors
///
/// As for [`account_data`].
pub async fn user_info(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.tiktok.user_info().await?))
}

/// One page of the connected account's videos
///
/// # Errors
///
/// 400 for an out-of-range `max_count`, otherwise as for [`account_data`].
pub async fn videos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VideoListQuery>,
) -> Result<Json<Value>, ApiError> {
    if let Err(validation_errors) = query.validate() {
        warn!("Invalid query parameters: {:?}", validation_errors);
        return Err(
            ApiError::new(StatusCode::BAD_REQUEST, "Invalid query parameters", "INVALID_PARAMETERS")
                .with_details(serde_json::json!(validation_errors)),
        );
    }

    let cursor = query.cursor.unwrap_or(0);
    let max_count = query.max_count.unwrap_or(MAX_VIDEO_PAGE);
    Ok(Json(state.tiktok.video_list(cursor, max_count).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_query_validation() {
        assert!(VideoListQuery::default().validate().is_ok());

        let full_page = VideoListQuery {
            cursor: Some(1_700_000_000),
            max_count: Some(20),
        };
        assert!(full_page.validate().is_ok());

        let empty_page = VideoListQuery {
            max_count: Some(0),
            ..VideoListQuery::default()
        };
        assert!(empty_page.validate().is_err());

        let oversized = VideoListQuery {
            max_count: Some(21),
            ..VideoListQuery::default()
        };
        assert!(oversized.validate().is_err());
    }
}
