//! Sharded session cache with inactivity expiry.
//!
//! Admitted waiting room sessions live here until they have been idle for the
//! configured inactivity duration. Every refresh pushes the deadline forward.
//! Expired sessions are handed back to the caller in deadline order so the
//! eviction engine can free their slot.

/// Cache data structures.
pub mod structs;

/// Implementation blocks for the cache.
pub mod impls;
