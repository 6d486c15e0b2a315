//! In-memory playlist used by the integration tests.
//!
//! Behaves like the remote service: pages of at most `limit` items with
//! `next` links, insert at a position, delete every copy of a URI, and move a
//! single item before another one. Every call is recorded, and calls of a
//! given kind can be made to fail.

#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use spotshuffle::{
    collection::{Page, PlaylistApi},
    error::RemoteError,
    types::Item,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Count,
    FirstPage { limit: usize },
    NextPage(String),
    Add { uris: Vec<String>, position: usize },
    Remove { uris: Vec<String> },
    Reorder { range_start: usize, insert_before: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Count,
    Page,
    Add,
    Remove,
    Reorder,
}

#[derive(Default)]
struct State {
    items: Vec<Item>,
    calls: Vec<Call>,
    seen: HashMap<Kind, usize>,
    /// (kind, 1-based call number of that kind, status)
    failures: Vec<(Kind, usize, u16, Option<u64>)>,
    /// Calls of a kind that fail with 429 before succeeding.
    throttled: HashMap<Kind, usize>,
    ignore_removes: bool,
}

#[derive(Default)]
pub struct StubPlaylist {
    state: Mutex<State>,
}

pub fn track(name: &str) -> Item {
    Item {
        uri: format!("spotify:track:{}", name),
        name: name.to_string(),
        artist: "Artist".to_string(),
        duration_ms: 180_000,
        is_local: false,
    }
}

pub fn tracks(count: usize) -> Vec<Item> {
    (0..count).map(|i| track(&format!("t{:04}", i))).collect()
}

impl StubPlaylist {
    pub fn with_items(items: Vec<Item>) -> Self {
        let stub = Self::default();
        stub.set_items(items);
        stub
    }

    pub fn set_items(&self, items: Vec<Item>) {
        let mut state = self.state.lock().unwrap();
        state.items = items;
        state.calls.clear();
        state.seen.clear();
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.items().into_iter().map(|i| i.name).collect()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count_of(&self, kind: Kind) -> usize {
        self.state
            .lock()
            .unwrap()
            .seen
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// The `nth` call (1-based) of `kind` answers with `status`.
    pub fn fail_on(&self, kind: Kind, nth: usize, status: u16) {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((kind, nth, status, None));
    }

    /// The first `times` calls of `kind` answer 429 with `Retry-After`.
    pub fn throttle(&self, kind: Kind, times: usize) {
        self.state.lock().unwrap().throttled.insert(kind, times);
    }

    /// Deletes are acknowledged but change nothing.
    pub fn ignore_removes(&self) {
        self.state.lock().unwrap().ignore_removes = true;
    }

    fn begin(&self, kind: Kind, call: Call) -> Result<std::sync::MutexGuard<'_, State>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        let nth = {
            let counter = state.seen.entry(kind).or_insert(0);
            *counter += 1;
            *counter
        };

        if let Some(remaining) = state.throttled.get_mut(&kind) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(RemoteError::Status {
                    status: 429,
                    body: "{\"error\":{\"status\":429,\"message\":\"API rate limit exceeded\"}}"
                        .to_string(),
                    retry_after: Some(0),
                });
            }
        }

        if let Some((_, _, status, retry_after)) = state
            .failures
            .iter()
            .find(|(k, n, _, _)| *k == kind && *n == nth)
            .copied()
        {
            return Err(RemoteError::Status {
                status,
                body: format!("{{\"error\":{{\"status\":{}}}}}", status),
                retry_after,
            });
        }

        Ok(state)
    }

    fn page_at(items: &[Item], offset: usize, limit: usize) -> Page {
        let end = (offset + limit).min(items.len());
        let next = (end < items.len()).then(|| format!("stub:{}:{}", end, limit));
        Page {
            items: items.get(offset..end).unwrap_or_default().to_vec(),
            next,
            total: Some(items.len()),
        }
    }
}

fn bad_request(message: &str) -> RemoteError {
    RemoteError::Status {
        status: 400,
        body: message.to_string(),
        retry_after: None,
    }
}

#[async_trait]
impl PlaylistApi for StubPlaylist {
    async fn item_count(&self, _: &str) -> Result<usize, RemoteError> {
        let state = self.begin(Kind::Count, Call::Count)?;
        Ok(state.items.len())
    }

    async fn first_page(&self, _: &str, limit: usize) -> Result<Page, RemoteError> {
        let state = self.begin(Kind::Page, Call::FirstPage { limit })?;
        Ok(Self::page_at(&state.items, 0, limit))
    }

    async fn next_page(&self, next: &str) -> Result<Page, RemoteError> {
        let state = self.begin(Kind::Page, Call::NextPage(next.to_string()))?;
        let mut parts = next.split(':').skip(1);
        let offset = parts.next().and_then(|v| v.parse().ok());
        let limit = parts.next().and_then(|v| v.parse().ok());
        match (offset, limit) {
            (Some(offset), Some(limit)) => Ok(Self::page_at(&state.items, offset, limit)),
            _ => Err(bad_request("malformed next link")),
        }
    }

    async fn add_items(&self, _: &str, uris: &[String], position: usize) -> Result<(), RemoteError> {
        let mut state = self.begin(
            Kind::Add,
            Call::Add {
                uris: uris.to_vec(),
                position,
            },
        )?;
        if uris.len() > 100 {
            return Err(bad_request("too many uris"));
        }
        if position > state.items.len() {
            return Err(bad_request("position out of range"));
        }
        let added: Vec<Item> = uris
            .iter()
            .map(|uri| {
                let name = uri.trim_start_matches("spotify:track:");
                track(name)
            })
            .collect();
        state.items.splice(position..position, added);
        Ok(())
    }

    async fn remove_items(&self, _: &str, uris: &[String]) -> Result<(), RemoteError> {
        let mut state = self.begin(
            Kind::Remove,
            Call::Remove {
                uris: uris.to_vec(),
            },
        )?;
        if uris.len() > 100 {
            return Err(bad_request("too many uris"));
        }
        if !state.ignore_removes {
            let doomed: HashSet<&String> = uris.iter().collect();
            state.items.retain(|item| !doomed.contains(&item.uri));
        }
        Ok(())
    }

    async fn reorder(
        &self,
        _: &str,
        range_start: usize,
        insert_before: usize,
    ) -> Result<(), RemoteError> {
        let mut state = self.begin(
            Kind::Reorder,
            Call::Reorder {
                range_start,
                insert_before,
            },
        )?;
        let len = state.items.len();
        if range_start >= len || insert_before > len {
            return Err(bad_request("index out of range"));
        }
        let item = state.items.remove(range_start);
        let target = if insert_before > range_start {
            insert_before - 1
        } else {
            insert_before
        };
        state.items.insert(target, item);
        Ok(())
    }
}
