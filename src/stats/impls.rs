pub mod registry;
pub mod stats_atomics;
