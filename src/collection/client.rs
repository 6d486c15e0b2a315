use std::collections::HashSet;

use crate::{
    collection::{MAX_BATCH, PlaylistApi},
    error::{MutationError, RemoteError},
    types::Item,
};

/// Logical playlist operations with pagination and batch limits hidden.
pub struct RemoteCollectionClient<A> {
    api: A,
}

impl<A: PlaylistApi> RemoteCollectionClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn item_count(&self, collection_id: &str) -> Result<usize, RemoteError> {
        self.api.item_count(collection_id).await
    }

    /// Reads the whole playlist, following `next` links until the last page.
    pub async fn fetch_all(&self, collection_id: &str) -> Result<Vec<Item>, RemoteError> {
        let mut page = self.api.first_page(collection_id, MAX_BATCH).await?;
        let mut items = Vec::with_capacity(page.total.unwrap_or(page.items.len()));

        loop {
            items.append(&mut page.items);
            match page.next.take() {
                Some(next) => page = self.api.next_page(&next).await?,
                None => break,
            }
        }

        Ok(items)
    }

    /// Adds `items` in chunks of [`MAX_BATCH`], chunk `k` at
    /// `start_position + k * MAX_BATCH`. Returns the number of calls issued.
    ///
    /// Stops at the first failing chunk; earlier chunks stay in the playlist.
    pub async fn append_batch(
        &self,
        collection_id: &str,
        items: &[Item],
        start_position: usize,
    ) -> Result<usize, MutationError> {
        let mut completed_calls = 0;

        for (index, chunk) in items.chunks(MAX_BATCH).enumerate() {
            let uris: Vec<String> = chunk.iter().map(|item| item.uri.clone()).collect();
            let position = start_position + index * MAX_BATCH;

            self.api
                .add_items(collection_id, &uris, position)
                .await
                .map_err(|source| MutationError {
                    completed_calls,
                    source,
                })?;
            completed_calls += 1;
        }

        Ok(completed_calls)
    }

    /// Empties the playlist by repeatedly deleting the URIs found on its first
    /// page. Returns the number of delete calls issued.
    ///
    /// Deleting a URI removes every copy of it, so a round may remove more
    /// items than the page held.
    pub async fn remove_all(&self, collection_id: &str) -> Result<usize, MutationError> {
        let mut completed_calls = 0;
        let mut previous: Option<Vec<String>> = None;

        loop {
            let page = self
                .api
                .first_page(collection_id, MAX_BATCH)
                .await
                .map_err(|source| MutationError {
                    completed_calls,
                    source,
                })?;

            if page.items.is_empty() {
                return Ok(completed_calls);
            }

            let mut seen = HashSet::new();
            let uris: Vec<String> = page
                .items
                .iter()
                .filter(|item| !item.uri.is_empty())
                .filter(|item| seen.insert(item.uri.as_str()))
                .map(|item| item.uri.clone())
                .collect();

            if uris.is_empty() || previous.as_ref() == Some(&uris) {
                return Err(MutationError {
                    completed_calls,
                    source: RemoteError::Stalled {
                        collection_id: collection_id.to_string(),
                    },
                });
            }

            self.api
                .remove_items(collection_id, &uris)
                .await
                .map_err(|source| MutationError {
                    completed_calls,
                    source,
                })?;
            completed_calls += 1;
            previous = Some(uris);
        }
    }

    /// Moves the item at `from` so it is inserted right before the item
    /// currently at `to`. The acknowledgment is trusted, nothing is read back.
    pub async fn reorder_pair(
        &self,
        collection_id: &str,
        from: usize,
        to: usize,
    ) -> Result<(), RemoteError> {
        self.api.reorder(collection_id, from, to).await
    }
}
