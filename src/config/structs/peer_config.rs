use serde::{Deserialize, Serialize};
use crate::config::enums::replication_mode::ReplicationMode;
use crate::config::structs::remote_peer_config::RemotePeerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PeerConfig {
    pub bind_address: String,
    pub name: String,
    pub mode: ReplicationMode,
    pub auto_sync: bool,
    /// Seconds between keepalive heartbeats, 0 disables them.
    pub heartbeat_interval: u64,
    pub remote_peers: Vec<RemotePeerConfig>,
}
