use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use actix::prelude::SendError;
use actix::Recipient;
use log::debug;
use parking_lot::RwLock;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::traits::presentation_sink::PresentationSink;
use crate::web::structs::broadcaster::Broadcaster;
use crate::web::structs::web_message::WebMessage;

impl Broadcaster {
    pub fn new(stats: Arc<StatsAtomics>) -> Broadcaster {
        Broadcaster {
            clients: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            stats,
        }
    }

    pub fn register(&self, recipient: Recipient<WebMessage>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut clients = self.clients.write();
        clients.insert(id, recipient);
        self.stats.set(StatsEvent::WebClients, clients.len() as i64);
        id
    }

    pub fn unregister(&self, id: u64) {
        let mut clients = self.clients.write();
        if clients.remove(&id).is_some() {
            self.stats.set(StatsEvent::WebClients, clients.len() as i64);
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.read().len()
    }

    /// Never waits on a client: full mailboxes drop the message, closed ones
    /// are forgotten.
    pub fn dispatch(&self, message: &str) {
        let mut closed = Vec::new();
        let mut sent = 0;
        let mut dropped = 0;
        {
            let clients = self.clients.read();
            for (id, recipient) in clients.iter() {
                match recipient.try_send(WebMessage(message.to_string())) {
                    Ok(()) => sent += 1,
                    Err(SendError::Full(_)) => dropped += 1,
                    Err(SendError::Closed(_)) => closed.push(*id),
                }
            }
        }
        if dropped > 0 {
            debug!("[WEB] Dropped a message for {dropped} slow clients");
        }
        for id in closed {
            self.unregister(id);
        }
        self.stats.update(StatsEvent::WebMessagesSent, sent);
        self.stats.update(StatsEvent::WebMessagesDropped, dropped);
    }
}

impl PresentationSink for Broadcaster {
    fn publish_snapshot(&self, message: String) {
        self.dispatch(&message);
    }

    fn publish_update(&self, _table: &str, _fingerprint: &str, message: String) {
        self.dispatch(&message);
    }

    fn has_listeners(&self) -> bool {
        !self.clients.read().is_empty()
    }
}
