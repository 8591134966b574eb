//! Access token persistence

use crate::error::TikTokResult;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// JSON file holding the most recent token response
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved token, `None` if nothing has been saved yet
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> TikTokResult<Option<Value>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved token");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Bearer value of the saved token
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn access_token(&self) -> TikTokResult<Option<String>> {
        Ok(self.load().await?.and_then(|token| {
            token
                .get("access_token")
                .and_then(Value::as_str)
                .map(str::to_string)
        }))
    }

    /// Overwrite the saved token
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, token: &Value) -> TikTokResult<()> {
        let body = serde_json::to_vec_pretty(token)?;
        tokio::fs::write(&self.path, body).await?;
        info!(path = %self.path.display(), "Token saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_no_token() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(store.access_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));
        let token = json!({"access_token": "act.abc", "open_id": "u1", "expires_in": 86400});

        store.save(&token).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(token));
        assert_eq!(
            store.access_token().await.unwrap(),
            Some("act.abc".to_string())
        );
    }

    #[tokio::test]
    async fn test_saved_file_is_indented() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        store.save(&json!({"access_token": "x"})).await.unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "{\n  \"access_token\": \"x\"\n}");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(TokenStore::new(path).load().await.is_err());
    }
}
