use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotshuffle::{cli, config, error, shuffle::Strategy, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List the playlists you own
    Playlists,

    /// List the tracks of a playlist
    Tracks(PlaylistArg),

    /// Randomize the track order of a playlist
    Shuffle(ShuffleOptions),

    /// Find tracks that appear more than once in a playlist
    Duplicates(DuplicatesOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistArg {
    /// Playlist id, spotify:playlist: URI or open.spotify.com link
    #[clap(value_parser = utils::parse_playlist_id)]
    playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Playlist id, spotify:playlist: URI or open.spotify.com link
    #[clap(value_parser = utils::parse_playlist_id)]
    playlist: String,

    /// How to shuffle
    #[clap(long, value_enum, default_value_t = Strategy::PairSwap)]
    strategy: Strategy,

    /// Fail on the first throttled request instead of waiting
    #[clap(long)]
    no_retry: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DuplicatesOptions {
    /// Playlist id, spotify:playlist: URI or open.spotify.com link
    #[clap(value_parser = utils::parse_playlist_id)]
    playlist: String,

    /// Remove the extra copies (not supported yet)
    #[clap(long)]
    remove: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Playlists => cli::list_playlists().await,
        Command::Tracks(opt) => cli::list_tracks(opt.playlist).await,
        Command::Shuffle(opt) => cli::shuffle(opt.playlist, opt.strategy, !opt.no_retry).await,
        Command::Duplicates(opt) => cli::duplicates(opt.playlist, opt.remove).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
