use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::route_config::RouteConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VwrConfig {
    pub room_table: String,
    pub user_table: String,
    /// Minutes of inactivity before an admitted session is evicted.
    pub inactivity_duration: u64,
    pub cache_shards: usize,
    /// Seconds between expiry sweeps.
    pub clean_interval: u64,
    pub target_port: u16,
    pub routes: BTreeMap<String, RouteConfig>,
}
