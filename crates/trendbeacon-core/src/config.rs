//! Configuration management for `TrendBeacon`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TRENDBEACON";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// TikTok developer application configuration
    pub tiktok: TikTokConfig,

    /// Local file storage configuration
    pub storage: StorageConfig,

    /// Dashboard page configuration
    pub dashboard: DashboardConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

/// TikTok developer application configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokConfig {
    /// Client key issued by the TikTok developer portal
    pub client_key: String,

    /// Client secret issued by the TikTok developer portal
    pub client_secret: String,

    /// Redirect URI registered for the application
    pub redirect_uri: String,

    /// Authorization endpoint
    pub authorize_url: String,

    /// Token exchange endpoint
    pub token_url: String,

    /// Base URL of the Open API
    pub api_base_url: String,

    /// Scopes requested at login
    pub scopes: Vec<String>,

    /// Upstream request timeout in seconds
    pub request_timeout: u64,
}

/// Local file storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the access token is persisted
    pub token_file: PathBuf,

    /// Where follower history samples are persisted
    pub follower_history_file: PathBuf,

    /// Maximum number of follower samples kept
    pub history_limit: usize,
}

/// Dashboard page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title
    pub title: String,

    /// Script URL of the charting library
    pub chart_library_url: String,

    /// Stylesheet URL of the icon font
    pub icon_stylesheet_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,

    /// Log format (json or text)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: 30,
        }
    }
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            client_key: String::new(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
            authorize_url: "https://www.tiktok.com/v2/auth/authorize".to_string(),
            token_url: "https://open.tiktokapis.com/v2/oauth/token/".to_string(),
            api_base_url: "https://open.tiktokapis.com/v2".to_string(),
            scopes: vec!["user.info.basic".to_string(), "video.list".to_string()],
            request_timeout: 30,
        }
    }
}

// The client secret never reaches the logs.
impl fmt::Debug for TikTokConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TikTokConfig")
            .field("client_key", &self.client_key)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("scopes", &self.scopes)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_file: PathBuf::from("token.json"),
            follower_history_file: PathBuf::from("follower_history.json"),
            history_limit: 365,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "TrendBeacon".to_string(),
            chart_library_url: "https://cdn.jsdelivr.net/npm/chart.js".to_string(),
            icon_stylesheet_url:
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                    .to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl TikTokConfig {
    /// Scopes joined the way the authorize endpoint expects them
    #[must_use]
    pub fn scope_param(&self) -> String {
        self.scopes.join(",")
    }

    /// Whether login can be attempted at all
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.client_key.is_empty() && !self.client_secret.is_empty()
    }

    /// Fill empty credentials from the unprefixed `TIKTOK_*` variables
    fn apply_legacy_env(&mut self) {
        if self.client_key.is_empty() {
            if let Ok(key) = std::env::var("TIKTOK_CLIENT_KEY") {
                self.client_key = key;
            }
        }
        if self.client_secret.is_empty() {
            if let Ok(secret) = std::env::var("TIKTOK_CLIENT_SECRET") {
                self.client_secret = secret;
            }
        }
        if let Ok(uri) = std::env::var("TIKTOK_REDIRECT_URI") {
            if !uri.is_empty() {
                self.redirect_uri = uri;
            }
        }
    }
}

impl Config {
    /// Load configuration from an optional file and the environment
    ///
    /// Without an explicit path, `trendbeacon.{toml,yaml,json}` in the working
    /// directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let file_source = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("trendbeacon").required(false),
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("tiktok.scopes"),
            )
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.tiktok.apply_legacy_env();
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.port == 0 {
            return Err(crate::Error::Validation {
                field: "server.port".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        if self.storage.history_limit == 0 {
            return Err(crate::Error::Validation {
                field: "storage.history_limit".to_string(),
                message: "must keep at least one sample".to_string(),
            });
        }
        if !matches!(self.logging.format.as_str(), "json" | "text") {
            return Err(crate::Error::Validation {
                field: "logging.format".to_string(),
                message: format!("expected json or text, got {}", self.logging.format),
            });
        }
        Ok(())
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
