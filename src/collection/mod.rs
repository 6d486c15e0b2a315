//! # Remote Collection Module
//!
//! A playlist lives on the remote service and can only be reached through a
//! handful of primitive calls: read a page, add a batch, delete a batch and
//! move a single item. This module defines those primitives as the
//! [`PlaylistApi`] trait and builds the logical operations the shufflers need
//! on top of it in [`RemoteCollectionClient`].
//!
//! ```text
//! Shufflers
//!     ↓
//! RemoteCollectionClient   (pagination, 100-item batches)
//!     ↓
//! Retrying<A, P>           (optional rate limit handling)
//!     ↓
//! PlaylistApi impl         (SpotifyApi over HTTP, in-memory stubs in tests)
//! ```
//!
//! Every call is awaited before the next one is issued. Nothing here locks or
//! versions the remote playlist.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::RemoteError, types::Item};

mod client;
pub mod retry;

pub use client::RemoteCollectionClient;

/// Upper bound of items per page, append or delete call.
pub const MAX_BATCH: usize = 100;

/// One page of a playlist as returned by the remote service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    /// Absolute link to the following page, `None` on the last one.
    pub next: Option<String>,
    pub total: Option<usize>,
}

/// Raw remote primitives of a playlist service.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    /// Number of items, read from playlist metadata only.
    async fn item_count(&self, collection_id: &str) -> Result<usize, RemoteError>;

    async fn first_page(&self, collection_id: &str, limit: usize) -> Result<Page, RemoteError>;

    /// Follows a `next` link returned by a previous page.
    async fn next_page(&self, next: &str) -> Result<Page, RemoteError>;

    /// Inserts `uris` so that the first one ends up at `position`.
    async fn add_items(
        &self,
        collection_id: &str,
        uris: &[String],
        position: usize,
    ) -> Result<(), RemoteError>;

    /// Removes every occurrence of each URI.
    async fn remove_items(&self, collection_id: &str, uris: &[String]) -> Result<(), RemoteError>;

    /// Moves the item at `range_start` so it sits immediately before the item
    /// currently at `insert_before`. `insert_before == len` moves it to the end.
    async fn reorder(
        &self,
        collection_id: &str,
        range_start: usize,
        insert_before: usize,
    ) -> Result<(), RemoteError>;
}

#[async_trait]
impl<A: PlaylistApi + ?Sized> PlaylistApi for Arc<A> {
    async fn item_count(&self, collection_id: &str) -> Result<usize, RemoteError> {
        (**self).item_count(collection_id).await
    }

    async fn first_page(&self, collection_id: &str, limit: usize) -> Result<Page, RemoteError> {
        (**self).first_page(collection_id, limit).await
    }

    async fn next_page(&self, next: &str) -> Result<Page, RemoteError> {
        (**self).next_page(next).await
    }

    async fn add_items(
        &self,
        collection_id: &str,
        uris: &[String],
        position: usize,
    ) -> Result<(), RemoteError> {
        (**self).add_items(collection_id, uris, position).await
    }

    async fn remove_items(&self, collection_id: &str, uris: &[String]) -> Result<(), RemoteError> {
        (**self).remove_items(collection_id, uris).await
    }

    async fn reorder(
        &self,
        collection_id: &str,
        range_start: usize,
        insert_before: usize,
    ) -> Result<(), RemoteError> {
        (**self)
            .reorder(collection_id, range_start, insert_before)
            .await
    }
}
