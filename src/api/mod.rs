//! # API Module
//!
//! HTTP endpoints of the short-lived local server started by
//! `spotshuffle auth`. Spotify redirects the browser to [`callback`] after the
//! user grants access; the handler finishes the PKCE exchange and hands the
//! token back to the waiting login flow through shared state.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotshuffle::api::callback;
//!
//! let app = Router::new().route("/callback", get(callback));
//! ```

mod callback;

pub use callback::callback;
