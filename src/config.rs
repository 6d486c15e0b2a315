//! Configuration management for spotshuffle.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file in the local data directory. The public Spotify endpoints, the scope
//! and the local callback address have defaults; the client id does not.
//!
//! Lookup order:
//! 1. Environment variables
//! 2. `.env` file in the local data directory
//! 3. Defaults below

use std::{env, path::PathBuf};

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SCOPE: &str = "playlist-modify-public playlist-modify-private playlist-read-private";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";
const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 5;
const DEFAULT_RETRY_MAX_WAIT_SECS: u64 = 120;

/// Directory holding `.env` and the token cache.
///
/// - Linux: `~/.local/share/spotshuffle`
/// - macOS: `~/Library/Application Support/spotshuffle`
/// - Windows: `%LOCALAPPDATA%/spotshuffle`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotshuffle");
    path
}

/// Loads `<data dir>/.env` into the process environment if the file exists.
///
/// Creates the data directory on first run. A missing `.env` is not an
/// error since every value can also come from the environment directly.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client id of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, ConfigError> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))
}

/// Callback URL registered with the Spotify application (`SPOTIFY_API_REDIRECT_URI`).
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Permissions requested at login (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Retries per remote call before giving up (`SPOTSHUFFLE_RETRY_MAX_ATTEMPTS`).
pub fn retry_max_attempts() -> u32 {
    env::var("SPOTSHUFFLE_RETRY_MAX_ATTEMPTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS)
}

/// Longest `Retry-After` the client is willing to sleep through
/// (`SPOTSHUFFLE_RETRY_MAX_WAIT_SECS`).
pub fn retry_max_wait_secs() -> u64 {
    env::var("SPOTSHUFFLE_RETRY_MAX_WAIT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RETRY_MAX_WAIT_SECS)
}
