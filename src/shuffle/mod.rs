//! # Shuffle Module
//!
//! Two strategies randomize a remote playlist. Both produce a uniformly random
//! order but differ in cost and in what a failure leaves behind:
//!
//! | strategy | remote calls | on failure |
//! |---|---|---|
//! | [`PairSwapShuffler`] | one move per step, up to n − 1 | all tracks still present, order partially shuffled |
//! | [`SnapshotShuffler`] | n/100 pages, deletes and adds | playlist may be empty or partially refilled |
//!
//! Neither strategy retries; wrap the transport in
//! [`crate::collection::retry::Retrying`] for that.

use std::{fmt, time::Duration};

use clap::ValueEnum;

use crate::{
    collection::{PlaylistApi, RemoteCollectionClient},
    error::ShuffleError,
};

mod pair_swap;
pub mod permutation;
mod snapshot;

pub use pair_swap::PairSwapShuffler;
pub use snapshot::SnapshotShuffler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Move tracks in place, one remote call per step
    #[default]
    PairSwap,
    /// Download, shuffle locally, then clear and refill the playlist
    Snapshot,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::PairSwap => f.write_str("pair-swap"),
            Strategy::Snapshot => f.write_str("snapshot"),
        }
    }
}

/// Outcome of a completed shuffle.
#[derive(Debug, Clone)]
pub struct ShuffleReport {
    pub strategy: Strategy,
    pub collection_id: String,
    pub items: usize,
    /// Calls that modified the playlist.
    pub mutations: usize,
    pub elapsed: Duration,
}

/// Runs the selected strategy against `collection_id`.
pub async fn run<A: PlaylistApi>(
    client: &RemoteCollectionClient<A>,
    collection_id: &str,
    strategy: Strategy,
) -> Result<ShuffleReport, ShuffleError> {
    match strategy {
        Strategy::PairSwap => PairSwapShuffler::new(client).run(collection_id).await,
        Strategy::Snapshot => SnapshotShuffler::new(client).run(collection_id).await,
    }
}
