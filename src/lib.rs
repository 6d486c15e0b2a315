//! Spotify Playlist Shuffler Library
//!
//! This library randomizes the track order of Spotify playlists. The core is
//! an unbiased Fisher–Yates shuffle adapted to a remote, paginated and rate
//! limited playlist that can only be changed through batched add/remove calls
//! and single-track moves.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `collection` - Remote playlist primitives, batching and retry policies
//! - `config` - Configuration management and environment variables
//! - `dedupe` - Duplicate track detection
//! - `error` - Error types of the shuffle engine
//! - `management` - Token storage and refresh
//! - `server` - Local HTTP server for OAuth callbacks
//! - `shuffle` - Pair-swap and snapshot shuffle strategies
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotshuffle::{collection::RemoteCollectionClient, shuffle, spotify::SpotifyApi, types::Credential};
//!
//! #[tokio::main]
//! async fn main() -> spotshuffle::Res<()> {
//!     let credential = Credential::new("BQC...")?;
//!     let client = RemoteCollectionClient::new(SpotifyApi::from_env(credential));
//!     let report = shuffle::run(&client, "37i9dQZF1DXcBWIGoYBM5M", shuffle::Strategy::Snapshot).await?;
//!     println!("{} tracks shuffled", report.items);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod collection;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod management;
pub mod server;
pub mod shuffle;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed result used by the application glue. Library code returns the
/// typed errors of the `error` module instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// ```
/// info!("Waiting for authorization in the browser...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red error line and exits the process with code 1.
///
/// Only for the CLI layer; library code returns errors.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!`. Used for recoverable problems
/// such as a throttled call that is about to be retried.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
