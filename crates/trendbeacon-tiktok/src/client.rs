//! HTTP client for the TikTok Open API

use crate::error::{TikTokError, TikTokResult};
use crate::followers::FollowerHistory;
use crate::store::TokenStore;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};
use trendbeacon_core::config::{StorageConfig, TikTokConfig};

/// Profile fields requested first
pub const USER_FIELDS: &str = "open_id,union_id,avatar_url,display_name,bio_description,\
profile_deep_link,is_verified,follower_count,following_count,likes_count,video_count";

/// Profile fields available to apps without the stats scopes
pub const MINIMAL_USER_FIELDS: &str = "open_id,avatar_url,display_name";

/// Video fields requested from the list endpoint
pub const VIDEO_FIELDS: &str = "id,title,video_description,duration,cover_image_url,\
share_url,view_count,like_count,comment_count,share_count,create_time";

/// Largest page the video list endpoint accepts
pub const MAX_VIDEO_PAGE: u32 = 20;

const SCOPE_NOT_AUTHORIZED: &str = "scope_not_authorized";

/// Body returned in place of API data when no token has been saved
#[must_use]
pub fn no_token() -> Value {
    json!({"error": "No token found"})
}

/// Everything the dashboard shows for a connected account
#[derive(Debug, Clone, Serialize)]
pub struct AccountData {
    /// Profile response
    pub user: Value,
    /// First page of videos
    pub videos: Value,
    /// Follower growth, `{}` when no profile data came back
    pub follower_growth: Value,
}

#[derive(Serialize)]
struct VideoListBody {
    max_count: u32,
    cursor: u64,
}

/// Client for the token endpoint and the Open API
#[derive(Debug, Clone)]
pub struct TikTokClient {
    client: Client,
    config: TikTokConfig,
    tokens: TokenStore,
    followers: FollowerHistory,
}

impl TikTokClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &TikTokConfig, storage: &StorageConfig) -> TikTokResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            tokens: TokenStore::new(&storage.token_file),
            followers: FollowerHistory::new(&storage.follower_history_file, storage.history_limit),
        })
    }

    /// Application configuration in use
    #[must_use]
    pub const fn config(&self) -> &TikTokConfig {
        &self.config
    }

    /// Saved token
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Follower history file
    #[must_use]
    pub const fn followers(&self) -> &FollowerHistory {
        &self.followers
    }

    /// Trade an authorization code for a token
    ///
    /// The raw response is returned; use [`crate::oauth::extract_token`] to
    /// find the token inside it.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails or the
    /// response is not JSON.
    pub async fn exchange_code(&self, code: &str, code_verifier: &str) -> TikTokResult<Value> {
        if !self.config.has_credentials() {
            return Err(TikTokError::MissingCredentials);
        }

        info!("Exchanging authorization code for access token");
        let form = [
            ("client_key", self.config.client_key.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("code_verifier", code_verifier),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];
        let request = self.client.post(&self.config.token_url).form(&form);
        read_json(request).await
    }

    /// Profile of the connected account
    ///
    /// Falls back to [`MINIMAL_USER_FIELDS`] when the app is not authorised
    /// for the full field set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file is unreadable, the request fails or
    /// the response is not JSON.
    pub async fn user_info(&self) -> TikTokResult<Value> {
        let Some(token) = self.tokens.access_token().await? else {
            return Ok(no_token());
        };

        let result = self.fetch_user(&token, USER_FIELDS).await?;
        if error_code(&result) == Some(SCOPE_NOT_AUTHORIZED) {
            info!("Full user info not available, retrying with minimal fields");
            return self.fetch_user(&token, MINIMAL_USER_FIELDS).await;
        }
        Ok(result)
    }

    async fn fetch_user(&self, token: &str, fields: &str) -> TikTokResult<Value> {
        let url = format!("{}/user/info/", self.config.api_base_url);
        let request = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("fields", fields)]);
        read_json(request).await
    }

    /// One page of the connected account's videos
    ///
    /// # Errors
    ///
    /// Returns an error if the token file is unreadable, the request fails or
    /// the response is not JSON.
    pub async fn video_list(&self, cursor: u64, max_count: u32) -> TikTokResult<Value> {
        let Some(token) = self.tokens.access_token().await? else {
            return Ok(no_token());
        };

        let url = format!("{}/video/list/", self.config.api_base_url);
        let request = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .query(&[("fields", VIDEO_FIELDS)])
            .json(&VideoListBody { max_count, cursor });
        read_json(request).await
    }

    /// Profile, first video page and follower growth in one call
    ///
    /// A nonzero follower count in the profile is recorded in the history
    /// before growth is computed.
    ///
    /// # Errors
    ///
    /// Returns an error if any upstream call or the history file fails.
    pub async fn all_data(&self) -> TikTokResult<AccountData> {
        let user = self.user_info().await?;
        let videos = self.video_list(0, MAX_VIDEO_PAGE).await?;

        let follower_growth = if user.get("data").is_some() {
            let now = chrono::Local::now().naive_local();
            let count = user
                .pointer("/data/user/follower_count")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            if count > 0 {
                self.followers.track(count, now).await?;
            }
            serde_json::to_value(self.followers.growth(now).await?)?
        } else {
            json!({})
        };

        Ok(AccountData {
            user,
            videos,
            follower_growth,
        })
    }
}

fn error_code(response: &Value) -> Option<&str> {
    response.pointer("/error/code").and_then(Value::as_str)
}

/// Send `request` and parse the body as JSON whatever the status
///
/// TikTok reports failures as JSON bodies, which callers pass through.
async fn read_json(request: RequestBuilder) -> TikTokResult<Value> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        debug!(%status, bytes = body.len(), "TikTok response");
    } else {
        warn!(%status, "TikTok returned an error status");
    }
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_lists() {
        assert_eq!(USER_FIELDS.split(',').count(), 11);
        assert!(USER_FIELDS.contains("follower_count"));
        assert!(!VIDEO_FIELDS.contains(' '));
        assert_eq!(VIDEO_FIELDS.split(',').count(), 11);
        assert!(!VIDEO_FIELDS.contains("favourite_count"));
    }

    #[test]
    fn test_error_code() {
        let scoped = json!({"error": {"code": "scope_not_authorized", "message": ""}});
        assert_eq!(error_code(&scoped), Some(SCOPE_NOT_AUTHORIZED));
        assert_eq!(error_code(&json!({"error": "No token found"})), None);
        assert_eq!(error_code(&json!({"data": {}})), None);
    }

    #[test]
    fn test_no_token_body() {
        assert_eq!(no_token().to_string(), r#"{"error":"No token found"}"#);
    }
}
