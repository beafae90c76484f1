use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub peers_connected: i64,
    pub peers_active: i64,
    pub handshakes_failed: i64,
    pub table_definitions: i64,
    pub entry_updates: i64,
    pub update_acks_sent: i64,
    pub update_acks_received: i64,
    pub decode_errors: i64,
    pub sessions_admitted: i64,
    pub sessions_queued: i64,
    pub sessions_expired: i64,
    pub sessions_promoted: i64,
    pub web_clients: i64,
    pub web_messages_sent: i64,
    pub web_messages_dropped: i64,
}
