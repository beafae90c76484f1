use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::key_type::KeyType;
use crate::protocol::protocol::{encode_frame, CLASS_UPDATE, STICK_TABLE_DEFINITION};
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::structs::table_definition::TableDefinition;
use crate::protocol::varint;

impl TableDefinition {
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.name.len() + 16);
        varint::encode_into(self.stick_table_id, &mut payload);
        varint::encode_into(self.name.len() as u64, &mut payload);
        payload.extend_from_slice(self.name.as_bytes());
        varint::encode_into(self.key_type.to_wire(), &mut payload);
        varint::encode_into(self.key_len, &mut payload);
        varint::encode_into(DataTypeKind::bitmask(&self.data_types), &mut payload);
        varint::encode_into(self.expiry, &mut payload);
        for (count, period) in &self.frequency {
            varint::encode_into(*count, &mut payload);
            varint::encode_into(*period, &mut payload);
        }
        payload
    }

    pub fn decode(payload: &[u8]) -> Result<TableDefinition, CodecError> {
        let mut cursor = PayloadCursor::new(payload);
        let stick_table_id = cursor.varint("stick table id")?;
        let name_len = cursor.varint("table name length")?;
        let name = String::from_utf8(cursor.bytes(name_len, "table name")?)
            .map_err(|_| CodecError::InvalidUtf8("table name"))?;
        let key_type = KeyType::from_wire(cursor.varint("key type")?)?;
        let key_len = cursor.varint("key length")?;
        let data_types = DataTypeKind::from_bitmask(cursor.varint("data types")?);
        let expiry = cursor.varint("expiry")?;

        let mut frequency = Vec::new();
        while !cursor.is_empty() {
            let count = cursor.varint("frequency count")?;
            let period = cursor.varint("frequency period")?;
            frequency.push((count, period));
        }

        Ok(TableDefinition {
            stick_table_id,
            name,
            key_type,
            key_len,
            data_types,
            expiry,
            frequency,
        })
    }

    pub fn to_frame(&self) -> Vec<u8> {
        encode_frame(CLASS_UPDATE, STICK_TABLE_DEFINITION, &self.encode())
    }

    pub fn has(&self, kind: DataTypeKind) -> bool {
        self.data_types.contains(&kind)
    }
}
