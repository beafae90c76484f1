//! Presentation server.
//!
//! A small actix-web application exposing the merged tables:
//!
//! - `GET /tables`: full JSON snapshot
//! - `GET /stats`: node statistics
//! - `GET /ws`: WebSocket feed, a snapshot on connect followed by one
//!   `{"mode": "update"}` message per changed entry
//!
//! Every WebSocket client is an actor with a bounded mailbox. The
//! [`Broadcaster`](structs::broadcaster::Broadcaster) pushes with `try_send`, a
//! client that falls behind loses messages instead of stalling the peers.

/// Broadcaster, client actor and service data.
pub mod structs;

/// Implementation blocks for the broadcaster and client actor.
pub mod impls;

/// Routes and service bootstrap.
#[allow(clippy::module_inception)]
pub mod web;

/// Unit tests for the presentation server.
pub mod tests;
