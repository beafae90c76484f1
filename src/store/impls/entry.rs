use serde_json::{json, Value};
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::structs::entry_update::EntryUpdate;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::store::structs::entry::Entry;

impl Entry {
    pub fn from_update(update: &EntryUpdate) -> Entry {
        Entry {
            key: update.key.clone(),
            values: update.values.clone(),
        }
    }

    pub fn to_update(&self, update_id: u32) -> EntryUpdate {
        EntryUpdate {
            update_id,
            key: self.key.clone(),
            values: self.values.clone(),
        }
    }

    pub fn scalar(&self, kind: DataTypeKind) -> Option<u64> {
        self.values.get(&kind).and_then(DataValue::scalar)
    }

    pub fn set_scalar(&mut self, kind: DataTypeKind, value: u64) {
        self.values.insert(kind, DataValue::Scalar(value));
    }

    /// `{"id", "key", "value"}` where value is every displayed number followed by a tab.
    pub fn presentation_json(&self, fingerprint: &str, definition: &TableDefinition) -> Value {
        let mut value = String::new();
        for kind in &definition.data_types {
            if kind.is_byte_counter() || !kind.is_on_wire() {
                continue;
            }
            let number = self.values.get(kind).map(DataValue::display_number).unwrap_or(0);
            value.push_str(&format!("{number}\t"));
        }
        json!({
            "id": fingerprint,
            "key": self.key.display(definition.key_type),
            "value": value,
        })
    }
}
