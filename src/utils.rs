use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Track length as `m:ss`, or `h:mm:ss` from one hour on.
pub fn format_track_length(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    let (hours, minutes, seconds) = (total_secs / 3600, (total_secs / 60) % 60, total_secs % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Wall-clock time of an operation for the user, e.g. `850ms`, `4.27s`, `3m 05s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let secs = elapsed.as_secs();
    if secs < 60 {
        return format!("{:.2}s", elapsed.as_secs_f64());
    }

    format!("{}m {:02}s", secs / 60, secs % 60)
}

/// Accepts a bare playlist id, a `spotify:playlist:` URI or an
/// `open.spotify.com/playlist/` link and returns the id.
pub fn parse_playlist_id(input: &str) -> Result<String, String> {
    let input = input.trim();
    let id = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some((_, rest)) = input.split_once("/playlist/") {
        rest.split(['?', '/', '#']).next().unwrap_or_default()
    } else {
        input
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("'{}' is not a playlist id, URI or link", input));
    }
    Ok(id.to_string())
}
