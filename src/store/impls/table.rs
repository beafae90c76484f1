use std::collections::BTreeMap;
use log::warn;
use serde_json::{json, Value};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::store::structs::table::Table;

impl Table {
    pub fn new(definition: TableDefinition) -> Table {
        Table {
            definition,
            local_update_id: 0,
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn next_update_id(&mut self) -> u32 {
        self.local_update_id = self.local_update_id.wrapping_add(1);
        self.local_update_id
    }

    /// Definition frame followed by the entry frame, `None` for an unknown entry.
    /// Consumes one update id.
    pub fn update_frames(&mut self, fingerprint: &str) -> Result<Option<Vec<u8>>, CodecError> {
        if !self.entries.contains_key(fingerprint) {
            return Ok(None);
        }
        let update_id = self.next_update_id();
        let Some(entry) = self.entries.get(fingerprint) else {
            return Ok(None);
        };
        let mut bytes = self.definition.to_frame();
        bytes.extend(entry.to_update(update_id).to_frame(&self.definition)?);
        Ok(Some(bytes))
    }

    /// Frames for every entry, used to answer a synchronization request.
    pub fn all_update_frames(&mut self) -> Vec<Vec<u8>> {
        let fingerprints: Vec<String> = self.entries.keys().cloned().collect();
        let mut frames = Vec::with_capacity(fingerprints.len());
        for fingerprint in fingerprints {
            match self.update_frames(&fingerprint) {
                Ok(Some(bytes)) => frames.push(bytes),
                Ok(None) => {}
                Err(error) => warn!("[SYNC] Skipping entry {} of {}: {}", fingerprint, self.name(), error),
            }
        }
        frames
    }

    pub fn value_types(&self) -> String {
        self.definition
            .data_types
            .iter()
            .filter(|kind| kind.is_on_wire())
            .map(|kind| format!("{}  ", kind.name()))
            .collect()
    }

    pub fn presentation_json(&self) -> Value {
        let entries: Vec<Value> = self
            .entries
            .iter()
            .map(|(fingerprint, entry)| entry.presentation_json(fingerprint, &self.definition))
            .collect();
        json!({
            "expiry": self.definition.expiry,
            "type": self.definition.key_type.label(),
            "vtypes": self.value_types(),
            "entries": entries,
        })
    }
}
