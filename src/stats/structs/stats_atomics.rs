use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub peers_connected: AtomicI64,
    pub peers_active: AtomicI64,
    pub handshakes_failed: AtomicI64,
    pub table_definitions: AtomicI64,
    pub entry_updates: AtomicI64,
    pub update_acks_sent: AtomicI64,
    pub update_acks_received: AtomicI64,
    pub decode_errors: AtomicI64,
    pub sessions_admitted: AtomicI64,
    pub sessions_queued: AtomicI64,
    pub sessions_expired: AtomicI64,
    pub sessions_promoted: AtomicI64,
    pub web_clients: AtomicI64,
    pub web_messages_sent: AtomicI64,
    pub web_messages_dropped: AtomicI64,
}
