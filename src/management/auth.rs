use std::path::PathBuf;

use chrono::Utc;

use crate::{
    config,
    error::AuthError,
    spotify,
    types::{Credential, Token},
};

/// Refresh this many seconds before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Keeps the OAuth token on disk and hands out valid credentials.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, AuthError> {
        let content = async_fs::read_to_string(Self::token_path())
            .await
            .map_err(|_| AuthError::MissingCredential)?;
        let token: Token =
            serde_json::from_str(&content).map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), AuthError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| AuthError::Storage(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&self.token)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))
    }

    /// Returns the stored access token, refreshing it first when it is about
    /// to expire.
    pub async fn get_valid_token(&mut self) -> Result<Credential, AuthError> {
        if self.is_expired() {
            self.token = spotify::auth::refresh_token(&self.token.refresh_token)
                .await
                .map_err(|_| AuthError::Expired)?;
            self.persist().await?;
        }

        Credential::new(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
