use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    collection::{PlaylistApi, RemoteCollectionClient},
    error::ShuffleError,
    shuffle::{ShuffleReport, Strategy, permutation::swap_steps},
};

/// Shuffles a playlist in place without downloading its tracks.
///
/// Step `(i, j)` moves the track at `j` to position `i`. Positions above `i`
/// are final at that point, so the track picked for `i` is uniform among the
/// ones still unplaced. `j == i` needs no call.
pub struct PairSwapShuffler<'c, A> {
    client: &'c RemoteCollectionClient<A>,
}

impl<'c, A: PlaylistApi> PairSwapShuffler<'c, A> {
    pub fn new(client: &'c RemoteCollectionClient<A>) -> Self {
        Self { client }
    }

    pub async fn run(&self, collection_id: &str) -> Result<ShuffleReport, ShuffleError> {
        let mut rng = StdRng::from_os_rng();
        self.run_with_rng(collection_id, &mut rng).await
    }

    pub async fn run_with_rng<R: Rng + ?Sized>(
        &self,
        collection_id: &str,
        rng: &mut R,
    ) -> Result<ShuffleReport, ShuffleError> {
        let started = Instant::now();
        let count = self.client.item_count(collection_id).await?;
        let mut moves = 0;

        for (i, j) in swap_steps(count, rng) {
            if i == j {
                continue;
            }

            // insert before i + 1 so the track lands on i
            if let Err(source) = self.client.reorder_pair(collection_id, j, i + 1).await {
                return Err(if moves == 0 {
                    ShuffleError::Remote(source)
                } else {
                    ShuffleError::PartialShuffle {
                        strategy: Strategy::PairSwap,
                        collection_id: collection_id.to_string(),
                        completed: moves,
                        source,
                    }
                });
            }
            moves += 1;
        }

        Ok(ShuffleReport {
            strategy: Strategy::PairSwap,
            collection_id: collection_id.to_string(),
            items: count,
            mutations: moves,
            elapsed: started.elapsed(),
        })
    }
}
