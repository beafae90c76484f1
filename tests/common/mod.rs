#![allow(dead_code)]
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use lineq::config::enums::replication_mode::ReplicationMode;
use lineq::config::structs::configuration::Configuration;
use lineq::config::structs::route_config::RouteConfig;
use lineq::peer::enums::peer_role::PeerRole;
use lineq::peer::peer::spawn_connection;
use lineq::protocol::enums::codec_error::CodecError;
use lineq::protocol::enums::data_type_kind::DataTypeKind;
use lineq::protocol::enums::data_value::DataValue;
use lineq::protocol::enums::entry_key::EntryKey;
use lineq::protocol::enums::key_type::KeyType;
use lineq::protocol::protocol::CLASS_UPDATE;
use lineq::protocol::structs::entry_update::EntryUpdate;
use lineq::protocol::structs::table_definition::TableDefinition;
use lineq::protocol::structs::update_ack::UpdateAck;
use lineq::protocol::varint;
use lineq::stats::structs::stats_atomics::StatsAtomics;
use lineq::store::structs::no_presentation::NoPresentation;
use lineq::store::structs::registry::Registry;

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_test_config(mode: ReplicationMode, capacity: u64) -> Configuration {
    let mut config = Configuration::init();
    config.peer.mode = mode;
    config.vwr.cache_shards = 8;
    config.vwr.routes.insert(String::from("site"), RouteConfig {
        active_users: capacity,
        path: String::from("/"),
        host: String::from("127.0.0.1:8080"),
    });
    config
}

pub fn create_test_registry(config: Configuration) -> Arc<Registry> {
    Arc::new(Registry::new(Arc::new(config), Arc::new(NoPresentation), Arc::new(StatsAtomics::new())))
}

pub fn users_definition() -> TableDefinition {
    TableDefinition {
        stick_table_id: 1,
        name: String::from("users"),
        key_type: KeyType::String,
        key_len: 72,
        data_types: vec![DataTypeKind::Gpc1],
        expiry: 300_000,
        frequency: Vec::new(),
    }
}

pub fn counters_definition() -> TableDefinition {
    TableDefinition {
        stick_table_id: 2,
        name: String::from("counters"),
        key_type: KeyType::Ipv4,
        key_len: 4,
        data_types: vec![DataTypeKind::ConnCnt, DataTypeKind::HttpReqRate],
        expiry: 60_000,
        frequency: vec![(10, 10_000)],
    }
}

pub fn scalar_update(update_id: u32, key: EntryKey, kind: DataTypeKind, value: u64) -> EntryUpdate {
    let mut values = BTreeMap::new();
    values.insert(kind, DataValue::Scalar(value));
    EntryUpdate { update_id, key, values }
}

/// One side of a peers connection, played by the test as an HAProxy instance.
pub struct FakeHaproxy {
    pub stream: TcpStream,
}

impl FakeHaproxy {
    /// Opens a loopback connection served by `registry` as an accepted peer.
    pub async fn connect(registry: &Arc<Registry>) -> FakeHaproxy {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let client = TcpStream::connect(address).await.unwrap();
        let (server, remote) = listener.accept().await.unwrap();
        spawn_connection(server, remote.to_string(), registry.clone(), PeerRole::Accept);
        FakeHaproxy { stream: client }
    }

    pub async fn handshake(&mut self, local_name: &str) {
        self.send(format!("HAProxyS 2.1\n{local_name}\nhaproxy1 777 1\n").as_bytes()).await;
        assert_eq!(self.read_exact(4).await, b"200\n");
    }

    pub async fn send(&mut self, bytes: &[u8]) {
        self.stream.write_all(bytes).await.unwrap();
    }

    pub async fn send_update(&mut self, definition: &TableDefinition, update: &EntryUpdate) {
        let mut bytes = definition.to_frame();
        bytes.extend(update.to_frame(definition).unwrap());
        self.send(&bytes).await;
    }

    pub async fn read_exact(&mut self, length: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; length];
        tokio::time::timeout(TIMEOUT, self.stream.read_exact(&mut bytes)).await.unwrap().unwrap();
        bytes
    }

    pub async fn read_line(&mut self) -> String {
        let mut line = Vec::new();
        loop {
            let byte = self.read_exact(1).await[0];
            if byte == b'\n' {
                return String::from_utf8(line).unwrap();
            }
            line.push(byte);
        }
    }

    /// Returns `(class, type, payload)`.
    pub async fn read_frame(&mut self) -> (u8, u8, Vec<u8>) {
        let header = self.read_exact(2).await;
        if header[0] != CLASS_UPDATE {
            return (header[0], header[1], Vec::new());
        }
        let mut length_bytes = Vec::new();
        let length = loop {
            length_bytes.extend(self.read_exact(1).await);
            match varint::decode(&length_bytes) {
                Ok((_, length)) => break length,
                Err(CodecError::Incomplete) => continue,
                Err(error) => panic!("invalid record length: {error}"),
            }
        };
        let payload = self.read_exact(length as usize).await;
        (header[0], header[1], payload)
    }

    pub async fn read_ack(&mut self) -> UpdateAck {
        let (class, message_type, payload) = self.read_frame().await;
        assert_eq!((class, message_type), (10, 132));
        UpdateAck::decode(&payload).unwrap()
    }

    /// Reads a definition frame and the entry update that follows it.
    pub async fn read_update(&mut self) -> (TableDefinition, EntryUpdate) {
        let (class, message_type, payload) = self.read_frame().await;
        assert_eq!((class, message_type), (10, 130));
        let definition = TableDefinition::decode(&payload).unwrap();
        let (class, message_type, payload) = self.read_frame().await;
        assert_eq!((class, message_type), (10, 128));
        let update = EntryUpdate::decode(&payload, &definition).unwrap();
        (definition, update)
    }
}
