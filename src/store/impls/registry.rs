use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use crate::cache::structs::session_cache::SessionCache;
use crate::config::structs::configuration::Configuration;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::structs::propagation::Propagation;
use crate::store::structs::registry::Registry;
use crate::store::structs::table::Table;
use crate::store::traits::presentation_sink::PresentationSink;

impl Registry {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(config: Arc<Configuration>, presentation: Arc<dyn PresentationSink>, stats: Arc<StatsAtomics>) -> Registry {
        let lifetime = Duration::from_secs(config.vwr.inactivity_duration.saturating_mul(60));
        Registry {
            sessions: SessionCache::new(config.vwr.cache_shards, lifetime),
            config,
            tables: RwLock::new(BTreeMap::new()),
            wait_queues: Mutex::new(HashMap::new()),
            peers: RwLock::new(BTreeMap::new()),
            presentation,
            stats,
            next_peer_id: AtomicU64::new(1),
        }
    }

    pub fn table(&self, name: &str) -> Option<Arc<RwLock<Table>>> {
        self.tables.read().get(name).cloned()
    }

    /// Returns the global table, creating it from `definition` the first time.
    pub fn table_or_create(&self, definition: &TableDefinition) -> Arc<RwLock<Table>> {
        if let Some(table) = self.table(&definition.name) {
            return table;
        }
        let mut tables = self.tables.write();
        tables
            .entry(definition.name.clone())
            .or_insert_with(|| {
                info!("[STORE] Created table {} (id {})", definition.name, definition.stick_table_id);
                Arc::new(RwLock::new(Table::new(definition.clone())))
            })
            .clone()
    }

    pub fn register_definition(&self, definition: &TableDefinition) {
        self.table_or_create(definition);
    }

    pub fn table_names(&self) -> Vec<String> {
        self.tables.read().keys().cloned().collect()
    }

    pub fn next_peer_id(&self) -> u64 {
        self.next_peer_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn register_peer(&self, peer: Arc<PeerHandle>) {
        debug!("[PEER] Registered peer #{} ({})", peer.id, peer.address);
        self.peers.write().insert(peer.id, peer);
        self.update_stats(StatsEvent::PeersConnected, 1);
    }

    pub fn unregister_peer(&self, id: u64) -> Option<Arc<PeerHandle>> {
        let removed = self.peers.write().remove(&id);
        if removed.is_some() {
            self.update_stats(StatsEvent::PeersConnected, -1);
        }
        removed
    }

    pub fn active_peers(&self) -> Vec<Arc<PeerHandle>> {
        self.peers
            .read()
            .values()
            .filter(|peer| peer.is_active())
            .cloned()
            .collect()
    }

    /// Sends the frames and publishes the entries collected while applying an update.
    pub fn propagate(&self, propagation: Propagation) {
        if propagation.is_empty() {
            return;
        }
        if !propagation.frames.is_empty() {
            let peers = self.active_peers();
            for frame in &propagation.frames {
                for peer in peers.iter().filter(|peer| Some(peer.id) != frame.except) {
                    peer.send(frame.bytes.clone());
                }
            }
        }
        for (table, fingerprint) in &propagation.entries {
            self.publish_entry(table, fingerprint);
        }
        if propagation.snapshot {
            self.publish_snapshot();
        }
    }

    /// Definition and entry frames for every stored entry.
    pub fn sync_frames(&self) -> Vec<Vec<u8>> {
        let tables: Vec<Arc<RwLock<Table>>> = self.tables.read().values().cloned().collect();
        tables
            .iter()
            .flat_map(|table| table.write().all_update_frames())
            .collect()
    }

    pub fn wait_queue(&self, route: &str) -> Vec<String> {
        self.wait_queues
            .lock()
            .get(route)
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }
}
