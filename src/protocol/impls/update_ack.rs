use byteorder::{BigEndian, WriteBytesExt};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::protocol::{encode_frame, CLASS_UPDATE, UPDATE_ACK};
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::structs::update_ack::UpdateAck;
use crate::protocol::varint;

impl UpdateAck {
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = varint::encode(self.stick_table_id);
        // Writing into a Vec cannot fail.
        let _ = payload.write_u32::<BigEndian>(self.update_id);
        payload
    }

    pub fn decode(payload: &[u8]) -> Result<UpdateAck, CodecError> {
        let mut cursor = PayloadCursor::new(payload);
        Ok(UpdateAck {
            stick_table_id: cursor.varint("stick table id")?,
            update_id: cursor.u32_be("update id")?,
        })
    }

    pub fn to_frame(&self) -> Vec<u8> {
        encode_frame(CLASS_UPDATE, UPDATE_ACK, &self.encode())
    }
}
