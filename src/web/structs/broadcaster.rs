use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use actix::Recipient;
use parking_lot::RwLock;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::web::structs::web_message::WebMessage;

/// Fans presentation messages out to the connected WebSocket clients.
pub struct Broadcaster {
    pub clients: RwLock<BTreeMap<u64, Recipient<WebMessage>>>,
    pub(crate) next_id: AtomicU64,
    pub stats: Arc<StatsAtomics>,
}
