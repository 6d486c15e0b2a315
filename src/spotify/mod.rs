//! # Spotify Integration Module
//!
//! The only place that talks HTTP to Spotify. It implements the raw playlist
//! primitives of [`crate::collection::PlaylistApi`] and the OAuth login flow.
//!
//! ## Architecture
//!
//! ```text
//! Shufflers / CLI
//!          ↓
//! collection::RemoteCollectionClient
//!          ↓
//! spotify::SpotifyApi     (bearer credential, wire format, status mapping)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow, code exchange and token refresh
//! - [`SpotifyApi`] - playlist page reads, batch add/remove, single-track moves
//! - listing of the current user and the playlists they own
//!
//! ## Wire Contract
//!
//! | call | endpoint | body |
//! |---|---|---|
//! | size | `GET /playlists/{id}?fields=tracks.total` | |
//! | page | `GET /playlists/{id}/tracks?limit=100`, then `next` | |
//! | add | `POST /playlists/{id}/tracks` | `{"uris": [...], "position": N}` |
//! | remove | `DELETE /playlists/{id}/tracks` | `{"tracks": [{"uri": ...}]}` |
//! | move | `PUT /playlists/{id}/tracks` | `{"range_start": N, "insert_before": M}` |
//!
//! Batches are limited to 100 URIs by the remote side; splitting happens one
//! layer up in the collection client.
//!
//! ## Error Handling
//!
//! Any non-2xx answer becomes [`crate::error::RemoteError::Status`] with the
//! status code, the body verbatim and the `Retry-After` header when sent.
//! Nothing is retried here. Rate limiting is handled by
//! [`crate::collection::retry`] when the caller wraps the transport.

pub mod auth;
mod client;
mod playlists;

pub use client::SpotifyApi;
