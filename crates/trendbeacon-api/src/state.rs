//! Application state management

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use trendbeacon_core::{Config, Result};
use trendbeacon_dashboard::DashboardPage;
use trendbeacon_tiktok::{PkcePair, TikTokClient, state_token};

/// How long a started login may wait for its callback
pub const PENDING_LOGIN_TTL: Duration = Duration::from_secs(600);

/// Verifier held between `/login` and `/callback`
#[derive(Debug, Clone)]
struct PendingLogin {
    verifier: String,
    started: Instant,
}

/// A login that has been recorded and can be redirected to TikTok
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStart {
    /// OAuth `state` parameter
    pub state: String,
    /// PKCE challenge for the stored verifier
    pub code_challenge: String,
}

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// TikTok API client and local stores
    pub tiktok: TikTokClient,
    /// Dashboard page built at startup
    pub page: DashboardPage,
    /// Rendered dashboard document
    pub page_html: String,
    /// Logins awaiting their callback, keyed by state
    pending: DashMap<String, PendingLogin>,
    started: Instant,
}

impl AppState {
    /// Create new application state
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the page fails
    /// to render.
    pub fn new(config: Config) -> Result<Self> {
        let tiktok = TikTokClient::new(&config.tiktok, &config.storage)?;
        let page = DashboardPage::standard(config.dashboard.clone())?;
        let page_html = page.render()?.into_string();

        Ok(Self {
            config,
            tiktok,
            page,
            page_html,
            pending: DashMap::new(),
            started: Instant::now(),
        })
    }

    /// Generate PKCE material and a state token, and remember the verifier
    pub fn begin_login(&self) -> LoginStart {
        self.prune_pending();

        let pkce = PkcePair::generate();
        let state = state_token();
        self.pending.insert(
            state.clone(),
            PendingLogin {
                verifier: pkce.verifier,
                started: Instant::now(),
            },
        );
        debug!(pending = self.pending.len(), "Recorded pending login");

        LoginStart {
            state,
            code_challenge: pkce.challenge,
        }
    }

    /// Remove and return the verifier for `state`; each state works once
    #[must_use]
    pub fn take_verifier(&self, state: &str) -> Option<String> {
        self.pending
            .remove(state)
            .filter(|(_, login)| login.started.elapsed() < PENDING_LOGIN_TTL)
            .map(|(_, login)| login.verifier)
    }

    /// Number of logins awaiting a callback
    #[must_use]
    pub fn pending_logins(&self) -> usize {
        self.pending.len()
    }

    /// Time since the state was created
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    fn prune_pending(&self) {
        self.pending
            .retain(|_, login| login.started.elapsed() < PENDING_LOGIN_TTL);
    }
}
