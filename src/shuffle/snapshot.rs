use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    collection::{PlaylistApi, RemoteCollectionClient},
    error::ShuffleError,
    shuffle::{ShuffleReport, Strategy, permutation::fisher_yates},
};

/// Shuffles a playlist by replacing its contents.
///
/// The remove and re-add steps are not atomic. A failure between them leaves
/// the playlist empty or partially refilled and is reported as
/// [`ShuffleError::PartialShuffle`].
pub struct SnapshotShuffler<'c, A> {
    client: &'c RemoteCollectionClient<A>,
}

impl<'c, A: PlaylistApi> SnapshotShuffler<'c, A> {
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
        let mut items = self.client.fetch_all(collection_id).await?;

        let unsupported = items.iter().filter(|item| !item.is_addressable()).count();
        if unsupported > 0 {
            return Err(ShuffleError::UnsupportedItems {
                collection_id: collection_id.to_string(),
                count: unsupported,
            });
        }

        if items.is_empty() {
            return Ok(ShuffleReport {
                strategy: Strategy::Snapshot,
                collection_id: collection_id.to_string(),
                items: 0,
                mutations: 0,
                elapsed: started.elapsed(),
            });
        }

        fisher_yates(&mut items, rng);

        let removals = self
            .client
            .remove_all(collection_id)
            .await
            .map_err(|e| ShuffleError::from_mutation(e, Strategy::Snapshot, collection_id, 0))?;

        let additions = self
            .client
            .append_batch(collection_id, &items, 0)
            .await
            .map_err(|e| {
                ShuffleError::from_mutation(e, Strategy::Snapshot, collection_id, removals)
            })?;

        Ok(ShuffleReport {
            strategy: Strategy::Snapshot,
            collection_id: collection_id.to_string(),
            items: items.len(),
            mutations: removals + additions,
            elapsed: started.elapsed(),
        })
    }
}
