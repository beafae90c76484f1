use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::{Mutex, RwLock};
use crate::cache::structs::session_cache::SessionCache;
use crate::config::structs::configuration::Configuration;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::structs::table::Table;
use crate::store::traits::presentation_sink::PresentationSink;

pub struct Registry {
    pub config: Arc<Configuration>,
    pub tables: RwLock<BTreeMap<String, Arc<RwLock<Table>>>>,
    /// Route name to fingerprints of sessions waiting for a slot.
    pub wait_queues: Mutex<HashMap<String, VecDeque<String>>>,
    pub peers: RwLock<BTreeMap<u64, Arc<PeerHandle>>>,
    pub sessions: SessionCache,
    pub presentation: Arc<dyn PresentationSink>,
    pub stats: Arc<StatsAtomics>,
    pub(crate) next_peer_id: AtomicU64,
}
