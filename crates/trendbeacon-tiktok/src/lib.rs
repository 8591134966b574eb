//! TikTok account access for `TrendBeacon`
//!
//! Covers the OAuth login (authorization code with PKCE), the Open API calls
//! the dashboard needs, and the two local files the server keeps: the saved
//! token and the follower count history.

#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod followers;
pub mod oauth;
pub mod pkce;
pub mod store;

pub use client::{AccountData, MAX_VIDEO_PAGE, TikTokClient, no_token};
pub use error::{TikTokError, TikTokResult};
pub use followers::{FollowerGrowth, FollowerHistory, FollowerSample};
pub use oauth::{authorize_url, extract_token, token_error_message};
pub use pkce::{PkcePair, state_token};
pub use store::TokenStore;
