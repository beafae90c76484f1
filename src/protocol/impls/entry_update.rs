use std::collections::BTreeMap;
use byteorder::{BigEndian, WriteBytesExt};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::data_value::DataValue;
use crate::protocol::enums::entry_key::EntryKey;
use crate::protocol::protocol::{encode_frame, CLASS_UPDATE, ENTRY_UPDATE};
use crate::protocol::structs::entry_update::EntryUpdate;
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::structs::table_definition::TableDefinition;

impl EntryUpdate {
    pub fn encode(&self, definition: &TableDefinition) -> Result<Vec<u8>, CodecError> {
        let mut payload = Vec::with_capacity(32);
        payload.write_u32::<BigEndian>(self.update_id).map_err(|_| CodecError::Truncated("update id"))?;
        self.key.write(definition.key_type, &mut payload)?;
        for kind in &definition.data_types {
            DataValue::write(*kind, self.values.get(kind), &mut payload)?;
        }
        Ok(payload)
    }

    /// Decodes against the definition that preceded the update on the connection.
    pub fn decode(payload: &[u8], definition: &TableDefinition) -> Result<EntryUpdate, CodecError> {
        let mut cursor = PayloadCursor::new(payload);
        let update_id = cursor.u32_be("update id")?;
        let key = EntryKey::read(definition.key_type, definition.key_len, &mut cursor)?;

        let mut values = BTreeMap::new();
        for kind in &definition.data_types {
            if let Some(value) = DataValue::read(*kind, &mut cursor)? {
                values.insert(*kind, value);
            }
        }

        Ok(EntryUpdate {
            update_id,
            key,
            values,
        })
    }

    pub fn to_frame(&self, definition: &TableDefinition) -> Result<Vec<u8>, CodecError> {
        Ok(encode_frame(CLASS_UPDATE, ENTRY_UPDATE, &self.encode(definition)?))
    }
}
