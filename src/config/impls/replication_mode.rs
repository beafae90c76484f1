use std::fmt;
use crate::config::enums::replication_mode::ReplicationMode;

impl ReplicationMode {
    pub fn is_waiting_room(&self) -> bool {
        matches!(self, ReplicationMode::vwr)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicationMode::agg => "agg",
            ReplicationMode::acc => "acc",
            ReplicationMode::vwr => "vwr",
        }
    }
}

impl fmt::Display for ReplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
