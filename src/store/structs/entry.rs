use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::enums::entry_key::EntryKey;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: EntryKey,
    pub values: BTreeMap<DataTypeKind, DataValue>,
}
