use std::io::{Cursor, Read};
use byteorder::{BigEndian, ReadBytesExt};
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::varint;

impl<'a> PayloadCursor<'a> {
    pub fn new(payload: &'a [u8]) -> PayloadCursor<'a> {
        PayloadCursor {
            inner: Cursor::new(payload),
        }
    }

    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.inner.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn varint(&mut self, field: &'static str) -> Result<u64, CodecError> {
        let start = self.position();
        let (consumed, value) = varint::decode(&self.inner.get_ref()[start..]).map_err(|error| match error {
            CodecError::Incomplete => CodecError::Truncated(field),
            other => other,
        })?;
        self.inner.set_position((start + consumed) as u64);
        Ok(value)
    }

    pub fn u32_be(&mut self, field: &'static str) -> Result<u32, CodecError> {
        self.inner.read_u32::<BigEndian>().map_err(|_| CodecError::Truncated(field))
    }

    pub fn i32_be(&mut self, field: &'static str) -> Result<i32, CodecError> {
        self.inner.read_i32::<BigEndian>().map_err(|_| CodecError::Truncated(field))
    }

    pub fn bytes(&mut self, length: u64, field: &'static str) -> Result<Vec<u8>, CodecError> {
        let length = usize::try_from(length).map_err(|_| CodecError::Truncated(field))?;
        if length > self.remaining() {
            return Err(CodecError::Truncated(field));
        }
        let mut bytes = vec![0u8; length];
        self.inner.read_exact(&mut bytes).map_err(|_| CodecError::Truncated(field))?;
        Ok(bytes)
    }
}
