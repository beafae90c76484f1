//! # lineq
//!
//! A stick-table peer for HAProxy, speaking the binary peers protocol that
//! HAProxy instances use to replicate their stick tables.
//!
//! ## Overview
//!
//! lineq accepts (and optionally dials) peers connections, decodes table
//! definitions and entry updates, merges them into a node-wide view and
//! replicates the result according to the configured mode:
//!
//! - **agg**: last writer wins, updates are forwarded to the other peers
//! - **acc**: counters are summed across the connected peers
//! - **vwr**: virtual waiting room, admission control with per-route capacity
//!   and FIFO queues, idle sessions are evicted after a timeout
//!
//! The merged tables are exposed over HTTP and a WebSocket feed.
//!
//! ## Modules
//!
//! - [`cache`] - Sharded session cache with idle expiry
//! - [`common`] - Logging setup, errors and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`haproxy`] - HAProxy configuration generator
//! - [`peer`] - Peers protocol connections, handshake and dispatch
//! - [`protocol`] - Wire codec: varints, frames and messages
//! - [`stats`] - Runtime statistics
//! - [`store`] - Merged tables and replication policies
//! - [`structs`] - CLI argument parsing
//! - [`web`] - Presentation server (HTTP and WebSocket)

/// Sharded session cache with idle expiry.
///
/// Tracks admitted waiting room sessions and hands out the ones that have been
/// silent for longer than the inactivity duration.
pub mod cache;

/// Common utilities and shared functionality.
///
/// Logging setup, the boot error type and shutdown aware sleeping.
pub mod common;

/// Configuration management module.
///
/// Loads, creates and validates `config.toml`.
pub mod config;

/// HAProxy configuration generator for the waiting room topology.
pub mod haproxy;

/// Peers protocol connections.
///
/// Listener, dialer, handshake state machine and message dispatch.
pub mod peer;

/// Peers protocol wire codec.
///
/// Varint encoding, framing, table definitions, entry updates and acks.
pub mod protocol;

/// Statistics tracking module.
pub mod stats;

/// Merged stick tables and the replication policies applied to them.
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Presentation server.
///
/// JSON snapshots over HTTP and a live WebSocket feed.
pub mod web;
