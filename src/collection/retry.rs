//! Rate limit handling as a decorator around any [`PlaylistApi`].
//!
//! The shufflers never retry. Wrapping the transport in [`Retrying`] makes
//! every primitive call go through a [`RetryPolicy`] instead, so throttling can
//! be simulated in tests without touching the shuffle algorithms.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use tokio::time::sleep;

use crate::{
    collection::{Page, PlaylistApi},
    config,
    error::RemoteError,
    warning,
};

/// Decides whether a failed call is attempted again, and after which delay.
pub trait RetryPolicy: Send + Sync {
    /// `attempt` is 0 for the first failure. `idempotent` is false for calls
    /// that modify the playlist.
    fn delay_for(&self, attempt: u32, error: &RemoteError, idempotent: bool) -> Option<Duration>;
}

/// Never retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetry;

impl RetryPolicy for NoRetry {
    fn delay_for(&self, _: u32, _: &RemoteError, _: bool) -> Option<Duration> {
        None
    }
}

/// Retries `429 Too Many Requests` for every call, honoring `Retry-After`,
/// and gateway errors for reads only, with exponential backoff.
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    pub max_attempts: u32,
    pub max_wait: Duration,
    pub base_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            max_wait: Duration::from_secs(120),
            base_delay: Duration::from_secs(1),
        }
    }
}

impl BackoffPolicy {
    pub fn from_env() -> Self {
        Self {
            max_attempts: config::retry_max_attempts(),
            max_wait: Duration::from_secs(config::retry_max_wait_secs()),
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            ..Self::default()
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
            .min(self.max_wait)
    }
}

impl RetryPolicy for BackoffPolicy {
    fn delay_for(&self, attempt: u32, error: &RemoteError, idempotent: bool) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }

        match error.status() {
            Some(429) => {
                let wait = error.retry_after().unwrap_or_else(|| self.backoff(attempt));
                if wait > self.max_wait {
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Giving up.",
                        wait.as_secs()
                    );
                    return None;
                }
                Some(wait)
            }
            Some(502..=504) if idempotent => Some(self.backoff(attempt)),
            _ => None,
        }
    }
}

/// A [`PlaylistApi`] that runs every call of `inner` under `policy`.
pub struct Retrying<A, P> {
    inner: A,
    policy: P,
}

impl<A: PlaylistApi, P: RetryPolicy> Retrying<A, P> {
    pub fn new(inner: A, policy: P) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    async fn run<T, F, Fut>(&self, operation: &str, idempotent: bool, mut call: F) -> Result<T, RemoteError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T, RemoteError>> + Send,
        T: Send,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(err) => match self.policy.delay_for(attempt, &err, idempotent) {
                    Some(delay) => {
                        warning!(
                            "{} failed ({}), retrying in {}s (attempt #{})",
                            operation,
                            err,
                            delay.as_secs(),
                            attempt + 1
                        );
                        sleep(delay).await;
                        attempt += 1;
                    }
                    None => return Err(err),
                },
            }
        }
    }
}

#[async_trait]
impl<A: PlaylistApi, P: RetryPolicy> PlaylistApi for Retrying<A, P> {
    async fn item_count(&self, collection_id: &str) -> Result<usize, RemoteError> {
        self.run("Reading playlist size", true, || {
            self.inner.item_count(collection_id)
        })
        .await
    }

    async fn first_page(&self, collection_id: &str, limit: usize) -> Result<Page, RemoteError> {
        self.run("Fetching playlist page", true, || {
            self.inner.first_page(collection_id, limit)
        })
        .await
    }

    async fn next_page(&self, next: &str) -> Result<Page, RemoteError> {
        self.run("Fetching playlist page", true, || self.inner.next_page(next))
            .await
    }

    async fn add_items(
        &self,
        collection_id: &str,
        uris: &[String],
        position: usize,
    ) -> Result<(), RemoteError> {
        self.run("Adding tracks", false, || {
            self.inner.add_items(collection_id, uris, position)
        })
        .await
    }

    async fn remove_items(&self, collection_id: &str, uris: &[String]) -> Result<(), RemoteError> {
        self.run("Removing tracks", false, || {
            self.inner.remove_items(collection_id, uris)
        })
        .await
    }

    async fn reorder(
        &self,
        collection_id: &str,
        range_start: usize,
        insert_before: usize,
    ) -> Result<(), RemoteError> {
        self.run("Moving track", false, || {
            self.inner.reorder(collection_id, range_start, insert_before)
        })
        .await
    }
}
