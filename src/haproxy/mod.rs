//! HAProxy configuration generator for the waiting room topology.
//!
//! The generated file declares a `peers` section pointing at this node, the
//! room and user stick tables, and a frontend that tracks every request
//! against both: a session is let through once its `gpc1` flag is set, and the
//! flag is only set while the route still has spare slots in `gpc0`.

/// Configuration rendering.
#[allow(clippy::module_inception)]
pub mod haproxy;

/// Unit tests for the generator.
pub mod tests;
