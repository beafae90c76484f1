use serde::{Deserialize, Serialize};
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::key_type::KeyType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub stick_table_id: u64,
    pub name: String,
    pub key_type: KeyType,
    pub key_len: u64,
    pub data_types: Vec<DataTypeKind>,
    pub expiry: u64,
    pub frequency: Vec<(u64, u64)>,
}
