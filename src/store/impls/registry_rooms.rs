use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::peer::structs::peer_handle::PeerHandle;
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::enums::entry_key::EntryKey;
use crate::protocol::enums::key_type::KeyType;
use crate::protocol::impls::entry_key::key_fingerprint;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::enums::admission::Admission;
use crate::store::structs::entry::Entry;
use crate::store::structs::propagation::Propagation;
use crate::store::structs::registry::Registry;

pub const ROOM_TABLE_ID: u64 = 777;
pub const ROOM_TABLE_KEY_LEN: u64 = 32;
pub const ROOM_TABLE_EXPIRY: u64 = 86_400_000;

impl Registry {
    pub fn room_definition(&self) -> TableDefinition {
        TableDefinition {
            stick_table_id: ROOM_TABLE_ID,
            name: self.config.vwr.room_table.clone(),
            key_type: KeyType::String,
            key_len: ROOM_TABLE_KEY_LEN,
            data_types: vec![DataTypeKind::Gpc0],
            expiry: ROOM_TABLE_EXPIRY,
            frequency: Vec::new(),
        }
    }

    /// Creates the room table with one slot counter per route and an empty
    /// queue for each route.
    pub fn bootstrap_rooms(&self) {
        let routes = &self.config.vwr.routes;
        let room = self.table_or_create(&self.room_definition());
        {
            let mut room = room.write();
            for (name, route) in routes {
                let mut values = BTreeMap::new();
                values.insert(DataTypeKind::Gpc0, DataValue::Scalar(route.active_users));
                room.entries.insert(key_fingerprint(name.as_bytes()), Entry {
                    key: EntryKey::Text(name.clone()),
                    values,
                });
            }
        }
        let mut queues = self.wait_queues.lock();
        for name in routes.keys() {
            queues.entry(name.clone()).or_default();
        }
        info!("[VWR] Room table {} initialized with {} routes", self.config.vwr.room_table, routes.len());
    }

    /// Route of a `"<session>@<route>"` key, only when the route is configured.
    pub fn route_of(&self, key: &EntryKey) -> Option<String> {
        let (_, route) = key.text()?.rsplit_once('@')?;
        if self.config.vwr.routes.contains_key(route) {
            return Some(route.to_string());
        }
        None
    }

    pub fn apply_waiting_room(&self, origin: &PeerHandle, definition: &TableDefinition, fingerprint: &str, entry: Entry) -> Propagation {
        if definition.name != self.config.vwr.user_table {
            return self.apply_last_writer(definition, fingerprint, entry);
        }
        let Some(route) = self.route_of(&entry.key) else {
            warn!("[VWR] Session key {:?} has no configured route, storing only", entry.key);
            return self.apply_last_writer(definition, fingerprint, entry);
        };

        let admitted = entry.scalar(DataTypeKind::Gpc1).unwrap_or(0) >= 1;
        let room_name = self.config.vwr.room_table.clone();
        let room_fingerprint = key_fingerprint(route.as_bytes());
        let user_table = self.table_or_create(definition);
        let room_table = self.table(&room_name);
        let mut propagation = Propagation::default();

        let mut users = user_table.write();
        let previous = users.entries.get(fingerprint).map(|stored| stored.scalar(DataTypeKind::Gpc1).unwrap_or(0));
        users.entries.insert(fingerprint.to_string(), entry);
        propagation.publish(&definition.name, fingerprint);

        let touch_session = match Admission::classify(previous, admitted) {
            Admission::Admitted => {
                match users.update_frames(fingerprint) {
                    Ok(Some(bytes)) => propagation.to_peers(bytes, Some(origin.id)),
                    Ok(None) => {}
                    Err(error) => warn!("[VWR] Unable to encode session update: {error}"),
                }
                if let Some(room_table) = &room_table {
                    let mut room = room_table.write();
                    if let Some(slot) = room.entries.get_mut(&room_fingerprint) {
                        let spare = slot.scalar(DataTypeKind::Gpc0).unwrap_or(0);
                        slot.set_scalar(DataTypeKind::Gpc0, spare.saturating_sub(1));
                    }
                    match room.update_frames(&room_fingerprint) {
                        Ok(Some(bytes)) => propagation.to_peers(bytes, None),
                        Ok(None) => warn!("[VWR] Room table has no slot for route {route}"),
                        Err(error) => warn!("[VWR] Unable to encode room update: {error}"),
                    }
                    propagation.publish(&room_name, &room_fingerprint);
                }
                if let Some(queue) = self.wait_queues.lock().get_mut(&route) {
                    queue.retain(|waiting| waiting != fingerprint);
                }
                self.update_stats(StatsEvent::SessionsAdmitted, 1);
                debug!("[VWR] Session admitted on route {route}");
                true
            }
            Admission::Refreshed => true,
            Admission::Queued => {
                let mut queues = self.wait_queues.lock();
                let queue = queues.entry(route.clone()).or_default();
                if !queue.iter().any(|waiting| waiting == fingerprint) {
                    queue.push_back(fingerprint.to_string());
                    self.update_stats(StatsEvent::SessionsQueued, 1);
                    debug!("[VWR] Session queued on route {route} at position {}", queue.len());
                }
                false
            }
            Admission::Unchanged => false,
        };
        if touch_session {
            self.sessions.set(fingerprint, &route);
        }
        drop(users);
        propagation
    }

    /// Frees the slot of an expired session: the head of the route queue is
    /// promoted, otherwise the spare capacity grows back by one.
    pub fn evict_session(&self, fingerprint: &str, route: &str) -> Propagation {
        self.release_slot(fingerprint, route, false).unwrap_or_default()
    }

    /// Eviction for a session already taken out of the cache. Returns `None`
    /// when the session was refreshed back into the cache in the meantime.
    pub fn expire_session(&self, fingerprint: &str, route: &str) -> Option<Propagation> {
        self.release_slot(fingerprint, route, true)
    }

    fn release_slot(&self, fingerprint: &str, route: &str, skip_refreshed: bool) -> Option<Propagation> {
        let vwr = &self.config.vwr;
        let capacity = vwr.routes.get(route).map(|config| config.active_users).unwrap_or(0);
        let room_fingerprint = key_fingerprint(route.as_bytes());
        let user_table = self.table(&vwr.user_table);
        let room_table = self.table(&vwr.room_table);
        let mut propagation = Propagation::default();
        let mut promoted = false;

        {
            let mut users = user_table.as_ref().map(|table| table.write());
            if skip_refreshed && self.sessions.contains(fingerprint) {
                debug!("[VWR] Session on route {route} was refreshed before eviction");
                return None;
            }
            if let Some(users) = users.as_mut() {
                users.entries.remove(fingerprint);
            }
            let mut room = room_table.as_ref().map(|table| table.write());
            let next = self.wait_queues.lock().get_mut(route).and_then(|queue| queue.pop_front());

            match next {
                Some(next) => {
                    if let Some(users) = users.as_mut() {
                        if let Some(waiting) = users.entries.get_mut(&next) {
                            waiting.set_scalar(DataTypeKind::Gpc1, 1);
                        }
                        match users.update_frames(&next) {
                            Ok(Some(bytes)) => propagation.to_peers(bytes, None),
                            Ok(None) => warn!("[VWR] Promoted session is missing from {}", vwr.user_table),
                            Err(error) => warn!("[VWR] Unable to encode promoted session: {error}"),
                        }
                        propagation.publish(&vwr.user_table, &next);
                    }
                    propagation.snapshot = true;
                    self.sessions.set(&next, route);
                    promoted = true;
                }
                None => {
                    if let Some(room) = room.as_mut() {
                        let mut freed = false;
                        if let Some(slot) = room.entries.get_mut(&room_fingerprint) {
                            let spare = slot.scalar(DataTypeKind::Gpc0).unwrap_or(0);
                            if spare < capacity {
                                slot.set_scalar(DataTypeKind::Gpc0, spare + 1);
                                freed = true;
                            }
                        }
                        if freed {
                            match room.update_frames(&room_fingerprint) {
                                Ok(Some(bytes)) => propagation.to_peers(bytes, None),
                                Ok(None) => {}
                                Err(error) => warn!("[VWR] Unable to encode room update: {error}"),
                            }
                            propagation.publish(&vwr.room_table, &room_fingerprint);
                        }
                    }
                }
            }
        }

        self.update_stats(StatsEvent::SessionsExpired, 1);
        if promoted {
            self.update_stats(StatsEvent::SessionsPromoted, 1);
            debug!("[VWR] Promoted next session on route {route}");
        }
        Some(propagation)
    }

    /// Evicts every session idle past its deadline, returns how many.
    pub fn sweep_sessions(&self, now: Instant) -> usize {
        let mut evicted = 0;
        for (fingerprint, route) in self.sessions.take_expired(now) {
            if let Some(propagation) = self.expire_session(&fingerprint, &route) {
                self.propagate(propagation);
                evicted += 1;
            }
        }
        evicted
    }

    pub async fn sweep_sessions_loop(self: Arc<Self>, shutdown: Shutdown) {
        let interval = Duration::from_secs(self.config.vwr.clean_interval);
        loop {
            if shutdown_waiting(interval, shutdown.clone()).await {
                info!("[BOOT] Shutting down thread for session expiry...");
                return;
            }
            let evicted = self.sweep_sessions(Instant::now());
            if evicted > 0 {
                info!("[VWR] Evicted {evicted} inactive sessions");
            }
        }
    }
}
