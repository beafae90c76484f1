use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum ReplicationMode {
    /// Mirror the last writer and forward to the other peers.
    #[default]
    agg,
    /// Sum counters across all active peers.
    acc,
    /// Virtual waiting room admission control.
    vwr,
}
