//! Peer connections.
//!
//! Every TCP connection, accepted or dialed, runs the same state machine:
//!
//! ```text
//! AwaitingGreeting -> AwaitingRemoteId -> AwaitingPeerInfo -> Active -> Closed
//! ```
//!
//! The handshake is line based (`HAProxyS 2.1`, remote id, peer info, status
//! code). Once active, binary messages are dispatched on their class and type.
//! Reads happen on the connection task; writes go through an unbounded outbox
//! drained by a dedicated writer task, so the registry can fan frames out to
//! every peer without awaiting.

/// Connection enumerations (state, role, errors).
pub mod enums;

/// Implementation blocks for handshake and dispatch.
pub mod impls;

/// Peer handle and connection structures.
pub mod structs;

/// Listener, dialer and writer tasks.
#[allow(clippy::module_inception)]
pub mod peer;
