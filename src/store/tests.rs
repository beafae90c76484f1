#[cfg(test)]
mod store_tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use parking_lot::Mutex;
    use crate::config::enums::replication_mode::ReplicationMode;
    use crate::config::structs::configuration::Configuration;
    use crate::config::structs::route_config::RouteConfig;
    use crate::peer::structs::peer_handle::PeerHandle;
    use crate::protocol::enums::data_type_kind::DataTypeKind;
    use crate::protocol::enums::data_value::DataValue;
    use crate::protocol::enums::entry_key::EntryKey;
    use crate::protocol::enums::key_type::KeyType;
    use crate::protocol::structs::entry_update::EntryUpdate;
    use crate::protocol::structs::table_definition::TableDefinition;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::store::structs::no_presentation::NoPresentation;
    use crate::store::structs::registry::Registry;
    use crate::store::traits::presentation_sink::PresentationSink;

    #[derive(Default)]
    struct RecordingSink {
        snapshots: Mutex<Vec<String>>,
        updates: Mutex<Vec<(String, String, String)>>,
    }

    impl PresentationSink for RecordingSink {
        fn publish_snapshot(&self, message: String) {
            self.snapshots.lock().push(message);
        }

        fn publish_update(&self, table: &str, fingerprint: &str, message: String) {
            self.updates.lock().push((table.to_string(), fingerprint.to_string(), message));
        }
    }

    fn registry(mode: ReplicationMode, sink: Arc<dyn PresentationSink>) -> Arc<Registry> {
        let mut config = Configuration::default();
        config.peer.mode = mode;
        config.vwr.cache_shards = 4;
        config.vwr.routes.insert(String::from("site"), RouteConfig {
            active_users: 1,
            path: String::from("/"),
            host: String::from("127.0.0.1:8080"),
        });
        Arc::new(Registry::new(Arc::new(config), sink, Arc::new(StatsAtomics::new())))
    }

    fn peer(registry: &Registry) -> Arc<PeerHandle> {
        let (handle, _outbox) = PeerHandle::new(registry.next_peer_id(), String::from("127.0.0.1:0"));
        let handle = Arc::new(handle);
        registry.register_peer(handle.clone());
        handle
    }

    fn counters() -> TableDefinition {
        TableDefinition {
            stick_table_id: 5,
            name: String::from("counters"),
            key_type: KeyType::String,
            key_len: 32,
            data_types: vec![DataTypeKind::ServerId, DataTypeKind::Gpc0, DataTypeKind::BytesInCnt],
            expiry: 60_000,
            frequency: Vec::new(),
        }
    }

    fn users() -> TableDefinition {
        TableDefinition {
            stick_table_id: 9,
            name: String::from("users"),
            key_type: KeyType::String,
            key_len: 32,
            data_types: vec![DataTypeKind::Gpc1],
            expiry: 300_000,
            frequency: Vec::new(),
        }
    }

    fn update(key: &str, kind: DataTypeKind, value: u64) -> EntryUpdate {
        let mut values = BTreeMap::new();
        values.insert(kind, DataValue::Scalar(value));
        EntryUpdate {
            update_id: 1,
            key: EntryKey::Text(key.to_string()),
            values,
        }
    }

    fn global_scalar(registry: &Registry, table: &str, key: &str, kind: DataTypeKind) -> Option<u64> {
        let table = registry.table(table)?;
        let table = table.read();
        table.entries.get(&EntryKey::Text(key.to_string()).fingerprint())?.scalar(kind)
    }

    mod admission_tests {
        use crate::store::enums::admission::Admission;

        #[test]
        fn test_classify() {
            assert_eq!(Admission::classify(None, true), Admission::Admitted);
            assert_eq!(Admission::classify(Some(0), true), Admission::Admitted);
            assert_eq!(Admission::classify(Some(1), true), Admission::Refreshed);
            assert_eq!(Admission::classify(None, false), Admission::Queued);
            assert_eq!(Admission::classify(Some(0), false), Admission::Unchanged);
        }
    }

    mod mirror_tests {
        use std::sync::Arc;
        use crate::config::enums::replication_mode::ReplicationMode;
        use crate::protocol::enums::data_type_kind::DataTypeKind;
        use crate::store::structs::no_presentation::NoPresentation;
        use super::{counters, global_scalar, peer, registry, update};

        #[test]
        fn test_last_writer_overwrites_global() {
            let registry = registry(ReplicationMode::agg, Arc::new(NoPresentation));
            let first = peer(&registry);
            let second = peer(&registry);
            let definition = counters();

            let propagation = registry.apply_entry_update(&first, &definition, &update("k", DataTypeKind::Gpc0, 4));
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(4));
            assert_eq!(propagation.frames.len(), 1);
            assert_eq!(propagation.frames[0].except, Some(first.id));

            registry.apply_entry_update(&second, &definition, &update("k", DataTypeKind::Gpc0, 1));
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(1));
        }

        #[test]
        fn test_forwarded_frame_reaches_only_other_peers() {
            let registry = registry(ReplicationMode::agg, Arc::new(NoPresentation));
            let (origin, mut origin_outbox) = crate::peer::structs::peer_handle::PeerHandle::new(100, String::from("a"));
            let (other, mut other_outbox) = crate::peer::structs::peer_handle::PeerHandle::new(101, String::from("b"));
            let origin = Arc::new(origin);
            registry.register_peer(origin.clone());
            registry.register_peer(Arc::new(other));

            let propagation = registry.apply_entry_update(&origin, &counters(), &update("k", DataTypeKind::Gpc0, 2));
            registry.propagate(propagation);

            assert!(origin_outbox.try_recv().is_err());
            let frame = other_outbox.try_recv().unwrap();
            assert_eq!(frame[0], 10);
            assert_eq!(frame[1], 130);
        }
    }

    mod accumulate_tests {
        use std::sync::Arc;
        use crate::config::enums::replication_mode::ReplicationMode;
        use crate::protocol::enums::data_type_kind::DataTypeKind;
        use crate::store::structs::no_presentation::NoPresentation;
        use super::{counters, global_scalar, peer, registry, update};

        #[test]
        fn test_sum_across_active_peers() {
            let registry = registry(ReplicationMode::acc, Arc::new(NoPresentation));
            let definition = counters();
            let peers = [peer(&registry), peer(&registry), peer(&registry)];

            for (handle, value) in peers.iter().zip([2, 5, 1]) {
                let propagation = registry.apply_entry_update(handle, &definition, &update("k", DataTypeKind::Gpc0, value));
                assert!(propagation.frames.is_empty());
            }
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(8));

            peers[1].deactivate();
            registry.apply_entry_update(&peers[0], &definition, &update("k", DataTypeKind::Gpc0, 2));
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(3));
        }

        #[test]
        fn test_concurrent_updates_settle_on_the_full_sum() {
            let registry = registry(ReplicationMode::acc, Arc::new(NoPresentation));
            let definition = counters();
            let peers: Vec<_> = (0..4).map(|_| peer(&registry)).collect();

            std::thread::scope(|scope| {
                for handle in &peers {
                    let registry = &registry;
                    let definition = &definition;
                    scope.spawn(move || {
                        for value in 1..=500 {
                            registry.apply_entry_update(handle, definition, &update("k", DataTypeKind::Gpc0, value));
                        }
                    });
                }
            });
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(2000));
        }

        #[test]
        fn test_byte_counters_not_summed() {
            let registry = registry(ReplicationMode::acc, Arc::new(NoPresentation));
            let handle = peer(&registry);
            registry.apply_entry_update(&handle, &counters(), &update("k", DataTypeKind::BytesInCnt, 70));
            assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::BytesInCnt), None);
        }
    }

    mod waiting_room_tests {
        use std::sync::Arc;
        use std::time::{Duration, Instant};
        use crate::config::enums::replication_mode::ReplicationMode;
        use crate::protocol::enums::data_type_kind::DataTypeKind;
        use crate::protocol::enums::entry_key::EntryKey;
        use crate::protocol::impls::entry_key::key_fingerprint;
        use crate::store::structs::no_presentation::NoPresentation;
        use super::{global_scalar, peer, registry, update, users};

        fn fingerprint(key: &str) -> String {
            EntryKey::Text(key.to_string()).fingerprint()
        }

        fn spare(registry: &crate::store::structs::registry::Registry) -> Option<u64> {
            global_scalar(registry, "room", "site", DataTypeKind::Gpc0)
        }

        #[test]
        fn test_bootstrap_rooms() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let room = registry.table("room").unwrap();
            let room = room.read();
            assert_eq!(room.definition.stick_table_id, 777);
            assert_eq!(room.definition.key_len, 32);
            assert_eq!(room.definition.expiry, 86_400_000);
            assert!(room.entries.contains_key(&key_fingerprint(b"site")));
            drop(room);
            assert_eq!(spare(&registry), Some(1));
            assert!(registry.wait_queue("site").is_empty());
        }

        #[test]
        fn test_route_of() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            assert_eq!(registry.route_of(&EntryKey::Text(String::from("a@b@site"))), Some(String::from("site")));
            assert_eq!(registry.route_of(&EntryKey::Text(String::from("alice@other"))), None);
            assert_eq!(registry.route_of(&EntryKey::Text(String::from("alice"))), None);
            assert_eq!(registry.route_of(&EntryKey::Sint(4)), None);
        }

        #[test]
        fn test_fifo_promotion_and_clamped_release() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let handle = peer(&registry);
            let definition = users();

            registry.apply_entry_update(&handle, &definition, &update("a@site", DataTypeKind::Gpc1, 1));
            assert_eq!(spare(&registry), Some(0));
            assert!(registry.sessions.contains(&fingerprint("a@site")));

            registry.apply_entry_update(&handle, &definition, &update("b@site", DataTypeKind::Gpc1, 0));
            registry.apply_entry_update(&handle, &definition, &update("c@site", DataTypeKind::Gpc1, 0));
            registry.apply_entry_update(&handle, &definition, &update("b@site", DataTypeKind::Gpc1, 0));
            assert_eq!(registry.wait_queue("site"), vec![fingerprint("b@site"), fingerprint("c@site")]);

            let propagation = registry.evict_session(&fingerprint("a@site"), "site");
            assert!(propagation.snapshot);
            assert_eq!(propagation.frames.len(), 1);
            assert_eq!(propagation.frames[0].except, None);
            assert_eq!(global_scalar(&registry, "users", "a@site", DataTypeKind::Gpc1), None);
            assert_eq!(global_scalar(&registry, "users", "b@site", DataTypeKind::Gpc1), Some(1));
            assert_eq!(registry.wait_queue("site"), vec![fingerprint("c@site")]);
            assert_eq!(spare(&registry), Some(0));
            assert!(registry.sessions.contains(&fingerprint("b@site")));

            registry.evict_session(&fingerprint("b@site"), "site");
            assert_eq!(global_scalar(&registry, "users", "c@site", DataTypeKind::Gpc1), Some(1));
            assert!(registry.wait_queue("site").is_empty());

            let propagation = registry.evict_session(&fingerprint("c@site"), "site");
            assert!(!propagation.snapshot);
            assert_eq!(spare(&registry), Some(1));

            let propagation = registry.evict_session(&fingerprint("ghost@site"), "site");
            assert!(propagation.frames.is_empty());
            assert_eq!(spare(&registry), Some(1));

            let stats = registry.get_stats();
            assert_eq!(stats.sessions_admitted, 1);
            assert_eq!(stats.sessions_queued, 2);
            assert_eq!(stats.sessions_promoted, 2);
            assert_eq!(stats.sessions_expired, 4);
        }

        #[test]
        fn test_refresh_during_sweep_keeps_the_slot() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let handle = peer(&registry);
            let definition = users();
            let later = Instant::now() + Duration::from_secs(60 * 60);

            registry.apply_entry_update(&handle, &definition, &update("a@site", DataTypeKind::Gpc1, 1));
            let expired = registry.sessions.take_expired(later);
            assert_eq!(expired, vec![(fingerprint("a@site"), String::from("site"))]);

            registry.apply_entry_update(&handle, &definition, &update("a@site", DataTypeKind::Gpc1, 1));
            registry.apply_entry_update(&handle, &definition, &update("b@site", DataTypeKind::Gpc1, 0));
            registry.apply_entry_update(&handle, &definition, &update("c@site", DataTypeKind::Gpc1, 0));

            assert!(registry.expire_session(&fingerprint("a@site"), "site").is_none());
            assert_eq!(global_scalar(&registry, "users", "a@site", DataTypeKind::Gpc1), Some(1));
            assert!(registry.sessions.contains(&fingerprint("a@site")));
            assert_eq!(registry.wait_queue("site"), vec![fingerprint("b@site"), fingerprint("c@site")]);

            assert_eq!(registry.sweep_sessions(later), 1);
            assert_eq!(global_scalar(&registry, "users", "b@site", DataTypeKind::Gpc1), Some(1));
            assert_eq!(global_scalar(&registry, "users", "c@site", DataTypeKind::Gpc1), Some(0));
            assert_eq!(registry.wait_queue("site"), vec![fingerprint("c@site")]);
            assert_eq!(spare(&registry), Some(0));

            let stats = registry.get_stats();
            assert_eq!(stats.sessions_expired, 1);
            assert_eq!(stats.sessions_promoted, 1);
        }

        #[test]
        fn test_refresh_does_not_consume_a_slot() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let handle = peer(&registry);
            registry.apply_entry_update(&handle, &users(), &update("a@site", DataTypeKind::Gpc1, 1));
            let propagation = registry.apply_entry_update(&handle, &users(), &update("a@site", DataTypeKind::Gpc1, 1));
            assert!(propagation.frames.is_empty());
            assert_eq!(spare(&registry), Some(0));
        }

        #[test]
        fn test_unknown_route_is_stored_only() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let handle = peer(&registry);
            registry.apply_entry_update(&handle, &users(), &update("a@nowhere", DataTypeKind::Gpc1, 1));
            assert_eq!(global_scalar(&registry, "users", "a@nowhere", DataTypeKind::Gpc1), Some(1));
            assert_eq!(spare(&registry), Some(1));
            assert!(registry.sessions.is_empty());
        }

        #[test]
        fn test_sweep_evicts_idle_sessions() {
            let registry = registry(ReplicationMode::vwr, Arc::new(NoPresentation));
            registry.bootstrap_rooms();
            let handle = peer(&registry);
            registry.apply_entry_update(&handle, &users(), &update("a@site", DataTypeKind::Gpc1, 1));

            assert_eq!(registry.sweep_sessions(Instant::now()), 0);
            let later = Instant::now() + Duration::from_secs(5 * 60 + 1);
            assert_eq!(registry.sweep_sessions(later), 1);
            assert_eq!(spare(&registry), Some(1));
            assert!(registry.sessions.is_empty());
        }
    }

    mod export_tests {
        use std::sync::Arc;
        use serde_json::Value;
        use crate::config::enums::replication_mode::ReplicationMode;
        use crate::protocol::enums::data_type_kind::DataTypeKind;
        use crate::protocol::enums::entry_key::EntryKey;
        use super::{counters, peer, registry, update, RecordingSink};

        #[test]
        fn test_snapshot_json() {
            let registry = registry(ReplicationMode::agg, Arc::new(RecordingSink::default()));
            let handle = peer(&registry);
            registry.apply_entry_update(&handle, &counters(), &update("k", DataTypeKind::Gpc0, 3));

            let snapshot = registry.snapshot_json();
            assert_eq!(snapshot["mode"], "tables");
            let table = &snapshot["counters"];
            assert_eq!(table["expiry"], 60_000);
            assert_eq!(table["type"], "string");
            assert_eq!(table["vtypes"], "server_id  gpc0  bytes_in_cnt  ");
            let entry = &table["entries"][0];
            assert_eq!(entry["id"], Value::from(EntryKey::Text(String::from("k")).fingerprint()));
            assert_eq!(entry["key"], "k");
            assert_eq!(entry["value"], "0\t3\t");
        }

        #[test]
        fn test_updates_reach_the_sink() {
            let sink = Arc::new(RecordingSink::default());
            let registry = registry(ReplicationMode::agg, sink.clone());
            let handle = peer(&registry);
            let propagation = registry.apply_entry_update(&handle, &counters(), &update("k", DataTypeKind::Gpc0, 3));
            registry.propagate(propagation);

            let updates = sink.updates.lock();
            assert_eq!(updates.len(), 1);
            let (table, fingerprint, message) = &updates[0];
            assert_eq!(table, "counters");
            assert_eq!(fingerprint, &EntryKey::Text(String::from("k")).fingerprint());
            let message: Value = serde_json::from_str(message).unwrap();
            assert_eq!(message["mode"], "update");
            assert_eq!(message["counters"]["entry"]["key"], "k");
            assert!(sink.snapshots.lock().is_empty());
        }

        #[test]
        fn test_missing_entry_has_no_update() {
            let registry = registry(ReplicationMode::agg, Arc::new(RecordingSink::default()));
            assert!(registry.entry_update_json("counters", "nope").is_none());
        }
    }

    #[test]
    fn test_mirror_is_reset_per_peer() {
        let registry = registry(ReplicationMode::agg, Arc::new(NoPresentation));
        let handle = peer(&registry);
        registry.apply_entry_update(&handle, &counters(), &update("k", DataTypeKind::Gpc0, 3));
        assert!(handle.mirror_entry("counters", &EntryKey::Text(String::from("k")).fingerprint()).is_some());
        handle.reset_mirror();
        assert!(handle.mirror_table("counters").is_none());
        assert_eq!(global_scalar(&registry, "counters", "k", DataTypeKind::Gpc0), Some(3));
    }
}
