//! Table store and replication policies.
//!
//! The [`Registry`](structs::registry::Registry) owns the merged view of every
//! stick table, the connected peers, the waiting room queues and the session
//! cache. Peer connections hand decoded entry updates to it and get back a
//! [`Propagation`](structs::propagation::Propagation) describing which frames
//! go to which peers and which entries the presentation feed should see.
//!
//! # Policies
//!
//! - **agg**: the global table mirrors the last writer, updates are forwarded
//!   to every other active peer
//! - **acc**: the global entry is the sum of the entry across active peers
//! - **vwr**: admission control on a room table (spare capacity per route) and
//!   a user table (admission flag per session), with FIFO wait queues
//!
//! # Locking
//!
//! Every table sits behind its own lock. When several are needed the order is
//! user table, room table, wait queues. No lock is held while frames are sent
//! or presentation messages are built.

/// Store enumerations.
pub mod enums;

/// Store data structures.
pub mod structs;

/// Implementation blocks for the store and its policies.
pub mod impls;

/// Presentation feed seam.
pub mod traits;

/// Unit tests for the store.
pub mod tests;
