//! Runtime counters for the peer node.
//!
//! All counters are atomic integers updated from the peer connections, the
//! waiting room engine and the presentation feed. A snapshot is exposed on the
//! `/stats` endpoint and printed by the console thread.
//!
//! # Example
//!
//! ```rust,ignore
//! use lineq::stats::enums::stats_event::StatsEvent;
//!
//! registry.update_stats(StatsEvent::EntryUpdates, 1);
//! let stats = registry.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
