//! Error types shared by the remote collection client and the shufflers.

use std::time::Duration;

use thiserror::Error;

use crate::shuffle::Strategy;

/// Problems with the bearer credential. Raised before any remote call is made.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No stored credential. Please run spotshuffle auth")]
    MissingCredential,

    #[error("Credential is empty or malformed")]
    InvalidCredential,

    #[error("Credential expired and could not be refreshed. Please run spotshuffle auth")]
    Expired,

    #[error("Token exchange failed: {0}")]
    Exchange(String),

    #[error("Token storage failed: {0}")]
    Storage(String),
}

/// A failed exchange with the remote service.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Non-success HTTP status, body kept verbatim.
    #[error("Remote service returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
        retry_after: Option<u64>,
    },

    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response payload: {0}")]
    Decode(String),

    #[error("Collection {collection_id} did not shrink after a delete round")]
    Stalled { collection_id: String },
}

impl RemoteError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            RemoteError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            RemoteError::Status {
                retry_after: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}

/// A batched mutation that stopped part way. Calls before the failing one
/// stay applied on the remote side.
#[derive(Error, Debug)]
#[error("Remote mutation failed after {completed_calls} successful calls: {source}")]
pub struct MutationError {
    pub completed_calls: usize,
    #[source]
    pub source: RemoteError,
}

#[derive(Error, Debug)]
pub enum ShuffleError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Nothing on the remote side was modified.
    #[error("{0}")]
    Remote(#[from] RemoteError),

    /// The remote playlist was modified before the failure; its order and
    /// content are no longer guaranteed.
    #[error(
        "{strategy} shuffle of {collection_id} aborted after {completed} remote mutations, the playlist may be incomplete or partially shuffled: {source}"
    )]
    PartialShuffle {
        strategy: Strategy,
        collection_id: String,
        completed: usize,
        #[source]
        source: RemoteError,
    },

    #[error(
        "Playlist {collection_id} holds {count} unavailable or local tracks that cannot be re-added. Use --strategy pair-swap"
    )]
    UnsupportedItems { collection_id: String, count: usize },
}

impl ShuffleError {
    /// Maps a batch failure to `Remote` when nothing was applied yet, and to
    /// `PartialShuffle` otherwise. `already_applied` counts mutations done by
    /// earlier stages of the same shuffle.
    pub fn from_mutation(
        err: MutationError,
        strategy: Strategy,
        collection_id: &str,
        already_applied: usize,
    ) -> Self {
        let completed = already_applied + err.completed_calls;
        if completed == 0 {
            ShuffleError::Remote(err.source)
        } else {
            ShuffleError::PartialShuffle {
                strategy,
                collection_id: collection_id.to_string(),
                completed,
                source: err.source,
            }
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, ShuffleError::PartialShuffle { .. })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}
