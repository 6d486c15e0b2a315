//! # CLI Module
//!
//! User-facing commands. Each command loads the stored token, builds the
//! remote collection client and reports progress and results with the
//! crate's output macros, spinners and tables.
//!
//! ## Commands
//!
//! - [`auth`] - log in with Spotify (OAuth 2.0 PKCE)
//! - [`list_playlists`] - show the playlists the user owns
//! - [`list_tracks`] - show the tracks of one playlist
//! - [`shuffle`] - randomize a playlist with the selected strategy
//! - [`duplicates`] - report tracks that appear more than once
//!
//! ## Usage
//!
//! ```bash
//! spotshuffle auth
//! spotshuffle playlists
//! spotshuffle shuffle 37i9dQZF1DXcBWIGoYBM5M --strategy snapshot
//! spotshuffle duplicates 37i9dQZF1DXcBWIGoYBM5M
//! ```
//!
//! Fatal problems end the process through [`crate::error!`] with exit code 1.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    collection::{
        RemoteCollectionClient,
        retry::{BackoffPolicy, Retrying},
    },
    error::AuthError,
    management::TokenManager,
    spotify::SpotifyApi,
};

mod auth;
mod duplicates;
mod playlists;
mod shuffle;

pub use auth::auth;
pub use duplicates::duplicates;
pub use playlists::list_playlists;
pub use playlists::list_tracks;
pub use shuffle::shuffle;

type Client = RemoteCollectionClient<Retrying<SpotifyApi, BackoffPolicy>>;

/// Builds a client for the stored credential. With `retry` off every
/// throttled call fails immediately.
async fn connect(retry: bool) -> Result<Client, AuthError> {
    let mut token_mgr = TokenManager::load().await?;
    let credential = token_mgr.get_valid_token().await?;

    let policy = if retry {
        BackoffPolicy::from_env()
    } else {
        BackoffPolicy::disabled()
    };

    Ok(RemoteCollectionClient::new(Retrying::new(
        SpotifyApi::from_env(credential),
        policy,
    )))
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} [{elapsed}]") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
