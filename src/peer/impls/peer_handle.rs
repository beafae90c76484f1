use std::sync::atomic::{AtomicBool, Ordering};
use parking_lot::RwLock;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use crate::protocol::structs::table_definition::TableDefinition;
use crate::store::structs::entry::Entry;
use crate::store::structs::table::Table;
use crate::peer::structs::peer_handle::PeerHandle;

impl PeerHandle {
    /// The receiver belongs to the writer task of the connection.
    pub fn new(id: u64, address: String) -> (PeerHandle, UnboundedReceiver<Vec<u8>>) {
        let (outbox, receiver) = unbounded_channel();
        (PeerHandle {
            id,
            address,
            active: AtomicBool::new(true),
            outbox,
            tables: RwLock::new(Default::default()),
        }, receiver)
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Returns `true` when the handle was still active.
    pub fn deactivate(&self) -> bool {
        self.active.swap(false, Ordering::SeqCst)
    }

    /// Queues bytes for the writer, `false` once the connection is gone.
    pub fn send(&self, bytes: Vec<u8>) -> bool {
        if !self.is_active() {
            return false;
        }
        self.outbox.send(bytes).is_ok()
    }


    pub fn register_definition(&self, definition: &TableDefinition) {
        let mut tables = self.tables.write();
        tables
            .entry(definition.name.clone())
            .or_insert_with(|| Table::new(definition.clone()));
    }

    /// Overwrites the mirrored entry, the mirror definition follows the latest one.
    pub fn store_entry(&self, definition: &TableDefinition, fingerprint: &str, entry: Entry) {
        let mut tables = self.tables.write();
        let table = tables
            .entry(definition.name.clone())
            .or_insert_with(|| Table::new(definition.clone()));
        table.definition = definition.clone();
        table.entries.insert(fingerprint.to_string(), entry);
    }

    pub fn mirror_table(&self, name: &str) -> Option<Table> {
        self.tables.read().get(name).cloned()
    }

    pub fn mirror_entry(&self, name: &str, fingerprint: &str) -> Option<Entry> {
        self.tables.read().get(name)?.entries.get(fingerprint).cloned()
    }

    pub fn reset_mirror(&self) {
        self.tables.write().clear();
    }
}
