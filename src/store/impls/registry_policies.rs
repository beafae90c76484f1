use std::collections::BTreeMap;
use log::warn;
use crate::config::enums::replication_mode::ReplicationMode;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::structs::entry_update::EntryUpdate;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::structs::entry::Entry;
use crate::store::structs::propagation::Propagation;
use crate::store::structs::registry::Registry;

impl Registry {
    /// Stores the update in the origin's mirror and merges it into the global
    /// table. The returned propagation must be passed to `propagate()` once the
    /// update has been acknowledged.
    pub fn apply_entry_update(&self, origin: &PeerHandle, definition: &TableDefinition, update: &EntryUpdate) -> Propagation {
        let fingerprint = update.key.fingerprint();
        let entry = Entry::from_update(update);
        origin.store_entry(definition, &fingerprint, entry.clone());
        self.update_stats(StatsEvent::EntryUpdates, 1);

        match self.config.peer.mode {
            ReplicationMode::agg => self.apply_mirror(origin, definition, &fingerprint),
            ReplicationMode::acc => self.apply_accumulate(definition, &fingerprint, &entry),
            ReplicationMode::vwr => self.apply_waiting_room(origin, definition, &fingerprint, entry),
        }
    }

    /// Global table becomes the origin's copy, forwarded to the other peers.
    pub fn apply_mirror(&self, origin: &PeerHandle, definition: &TableDefinition, fingerprint: &str) -> Propagation {
        let mut propagation = Propagation::default();
        let Some(mirror) = origin.mirror_table(&definition.name) else {
            return propagation;
        };

        let global = self.table_or_create(definition);
        let frames = {
            let mut table = global.write();
            table.definition = mirror.definition;
            table.entries = mirror.entries;
            table.update_frames(fingerprint)
        };
        match frames {
            Ok(Some(bytes)) => propagation.to_peers(bytes, Some(origin.id)),
            Ok(None) => {}
            Err(error) => warn!("[AGG] Unable to encode {} for forwarding: {}", definition.name, error),
        }
        propagation.publish(&definition.name, fingerprint);
        propagation
    }

    /// Global entry becomes the sum of the entry across all active peers. The
    /// global table stays write-locked from the first mirror read to the insert.
    pub fn apply_accumulate(&self, definition: &TableDefinition, fingerprint: &str, entry: &Entry) -> Propagation {
        let summed: Vec<DataTypeKind> = definition
            .data_types
            .iter()
            .copied()
            .filter(|kind| kind.is_scalar() || *kind == DataTypeKind::HttpReqRate)
            .collect();

        let mut values = BTreeMap::new();
        if let Some(server) = entry.values.get(&DataTypeKind::ServerId) {
            values.insert(DataTypeKind::ServerId, server.clone());
        }
        for kind in &summed {
            if let Some(zero) = DataValue::zero_for(*kind) {
                values.insert(*kind, zero);
            }
        }

        let global = self.table_or_create(definition);
        let mut table = global.write();
        for peer in self.active_peers() {
            let Some(local) = peer.mirror_entry(&definition.name, fingerprint) else {
                continue;
            };
            for kind in &summed {
                let sum = match (values.get(kind), local.values.get(kind)) {
                    (Some(total), Some(value)) => total.summed(value),
                    _ => None,
                };
                if let Some(sum) = sum {
                    values.insert(*kind, sum);
                }
            }
        }

        table.entries.insert(fingerprint.to_string(), Entry {
            key: entry.key.clone(),
            values,
        });
        drop(table);

        let mut propagation = Propagation::default();
        propagation.publish(&definition.name, fingerprint);
        propagation
    }

    /// Plain overwrite of the global entry.
    pub fn apply_last_writer(&self, definition: &TableDefinition, fingerprint: &str, entry: Entry) -> Propagation {
        let global = self.table_or_create(definition);
        global.write().entries.insert(fingerprint.to_string(), entry);

        let mut propagation = Propagation::default();
        propagation.publish(&definition.name, fingerprint);
        propagation
    }
}
