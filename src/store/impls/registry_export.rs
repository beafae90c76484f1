use serde_json::{Map, Value};
use crate::store::structs::registry::Registry;

impl Registry {
    /// `{"mode": "tables", "<table>": {...}}` for every table.
    pub fn snapshot_json(&self) -> Value {
        let mut snapshot = Map::new();
        snapshot.insert(String::from("mode"), Value::from("tables"));
        for name in self.table_names() {
            if let Some(table) = self.table(&name) {
                let table = table.read().clone();
                snapshot.insert(name, table.presentation_json());
            }
        }
        Value::Object(snapshot)
    }

    /// `{"mode": "update", "<table>": {"expiry", "type", "entry"}}`, `None` when
    /// the entry no longer exists.
    pub fn entry_update_json(&self, table_name: &str, fingerprint: &str) -> Option<Value> {
        let table = self.table(table_name)?;
        let (definition, entry) = {
            let table = table.read();
            (table.definition.clone(), table.entries.get(fingerprint)?.clone())
        };

        let mut info = Map::new();
        info.insert(String::from("expiry"), Value::from(definition.expiry));
        info.insert(String::from("type"), Value::from(definition.key_type.label()));
        info.insert(String::from("entry"), entry.presentation_json(fingerprint, &definition));

        let mut update = Map::new();
        update.insert(String::from("mode"), Value::from("update"));
        update.insert(table_name.to_string(), Value::Object(info));
        Some(Value::Object(update))
    }

    pub fn publish_entry(&self, table_name: &str, fingerprint: &str) {
        if !self.presentation.has_listeners() {
            return;
        }
        if let Some(message) = self.entry_update_json(table_name, fingerprint) {
            self.presentation.publish_update(table_name, fingerprint, message.to_string());
        }
    }

    pub fn publish_snapshot(&self) {
        if !self.presentation.has_listeners() {
            return;
        }
        self.presentation.publish_snapshot(self.snapshot_json().to_string());
    }
}
