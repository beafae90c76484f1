use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            peers_connected: AtomicI64::new(0),
            peers_active: AtomicI64::new(0),
            handshakes_failed: AtomicI64::new(0),
            table_definitions: AtomicI64::new(0),
            entry_updates: AtomicI64::new(0),
            update_acks_sent: AtomicI64::new(0),
            update_acks_received: AtomicI64::new(0),
            decode_errors: AtomicI64::new(0),
            sessions_admitted: AtomicI64::new(0),
            sessions_queued: AtomicI64::new(0),
            sessions_expired: AtomicI64::new(0),
            sessions_promoted: AtomicI64::new(0),
            web_clients: AtomicI64::new(0),
            web_messages_sent: AtomicI64::new(0),
            web_messages_dropped: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::PeersConnected => &self.peers_connected,
            StatsEvent::PeersActive => &self.peers_active,
            StatsEvent::HandshakesFailed => &self.handshakes_failed,
            StatsEvent::TableDefinitions => &self.table_definitions,
            StatsEvent::EntryUpdates => &self.entry_updates,
            StatsEvent::UpdateAcksSent => &self.update_acks_sent,
            StatsEvent::UpdateAcksReceived => &self.update_acks_received,
            StatsEvent::DecodeErrors => &self.decode_errors,
            StatsEvent::SessionsAdmitted => &self.sessions_admitted,
            StatsEvent::SessionsQueued => &self.sessions_queued,
            StatsEvent::SessionsExpired => &self.sessions_expired,
            StatsEvent::SessionsPromoted => &self.sessions_promoted,
            StatsEvent::WebClients => &self.web_clients,
            StatsEvent::WebMessagesSent => &self.web_messages_sent,
            StatsEvent::WebMessagesDropped => &self.web_messages_dropped,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set(&self, event: StatsEvent, value: i64) {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            peers_connected: self.peers_connected.load(Ordering::SeqCst),
            peers_active: self.peers_active.load(Ordering::SeqCst),
            handshakes_failed: self.handshakes_failed.load(Ordering::SeqCst),
            table_definitions: self.table_definitions.load(Ordering::SeqCst),
            entry_updates: self.entry_updates.load(Ordering::SeqCst),
            update_acks_sent: self.update_acks_sent.load(Ordering::SeqCst),
            update_acks_received: self.update_acks_received.load(Ordering::SeqCst),
            decode_errors: self.decode_errors.load(Ordering::SeqCst),
            sessions_admitted: self.sessions_admitted.load(Ordering::SeqCst),
            sessions_queued: self.sessions_queued.load(Ordering::SeqCst),
            sessions_expired: self.sessions_expired.load(Ordering::SeqCst),
            sessions_promoted: self.sessions_promoted.load(Ordering::SeqCst),
            web_clients: self.web_clients.load(Ordering::SeqCst),
            web_messages_sent: self.web_messages_sent.load(Ordering::SeqCst),
            web_messages_dropped: self.web_messages_dropped.load(Ordering::SeqCst),
        }
    }
}
