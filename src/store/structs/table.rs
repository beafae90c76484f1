use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::protocol::structs::table_definition::TableDefinition;
use crate::store::structs::entry::Entry;

/// Entries are keyed by key fingerprint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub definition: TableDefinition,
    pub local_update_id: u32,
    pub entries: BTreeMap<String, Entry>,
}
