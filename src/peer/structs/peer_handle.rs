use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use crate::store::structs::table::Table;

/// Shared side of a peer connection: its outbox and its table mirror.
#[derive(Debug)]
pub struct PeerHandle {
    pub id: u64,
    pub address: String,
    pub(crate) active: AtomicBool,
    pub(crate) outbox: UnboundedSender<Vec<u8>>,
    /// Tables as last told by this peer.
    pub tables: RwLock<BTreeMap<String, Table>>,
}
