use std::net::{Ipv4Addr, Ipv6Addr};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use byteorder::{BigEndian, WriteBytesExt};
use serde_json::Value;
use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::entry_key::EntryKey;
use crate::protocol::enums::key_type::KeyType;
use crate::protocol::structs::payload_cursor::PayloadCursor;
use crate::protocol::varint;

impl EntryKey {
    pub fn read(key_type: KeyType, key_len: u64, cursor: &mut PayloadCursor) -> Result<EntryKey, CodecError> {
        match key_type {
            KeyType::Sint => Ok(EntryKey::Sint(cursor.i32_be("sint key")?)),
            KeyType::Ipv4 => Ok(EntryKey::Bytes(cursor.bytes(key_len, "ipv4 key")?)),
            KeyType::String => {
                let length = cursor.varint("string key length")?;
                let bytes = cursor.bytes(length, "string key")?;
                String::from_utf8(bytes)
                    .map(EntryKey::Text)
                    .map_err(|_| CodecError::InvalidUtf8("string key"))
            }
            KeyType::Ipv6 | KeyType::Binary => Err(CodecError::UnsupportedKeyType(key_type)),
        }
    }

    /// IPv6 and binary keys are not written.
    pub fn write(&self, key_type: KeyType, bytes: &mut Vec<u8>) -> Result<(), CodecError> {
        match (key_type, self) {
            (KeyType::Sint, EntryKey::Sint(number)) => {
                bytes.write_i32::<BigEndian>(*number).map_err(|_| CodecError::KeyMismatch(key_type))?;
            }
            (KeyType::Ipv4, EntryKey::Bytes(address)) => bytes.extend_from_slice(address),
            (KeyType::String, EntryKey::Text(text)) => {
                varint::encode_into(text.len() as u64, bytes);
                bytes.extend_from_slice(text.as_bytes());
            }
            (KeyType::Ipv6 | KeyType::Binary, _) => {}
            _ => return Err(CodecError::KeyMismatch(key_type)),
        }
        Ok(())
    }

    /// Integer keys use little-endian bytes for fingerprinting.
    pub fn raw_bytes(&self) -> Vec<u8> {
        match self {
            EntryKey::Sint(number) => number.to_le_bytes().to_vec(),
            EntryKey::Text(text) => text.as_bytes().to_vec(),
            EntryKey::Bytes(bytes) => bytes.clone(),
        }
    }

    pub fn fingerprint(&self) -> String {
        key_fingerprint(&self.raw_bytes())
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            EntryKey::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn display(&self, key_type: KeyType) -> Value {
        match (key_type, self) {
            (_, EntryKey::Sint(number)) => Value::from(*number),
            (_, EntryKey::Text(text)) => Value::from(text.as_str()),
            (KeyType::Ipv4, EntryKey::Bytes(bytes)) if bytes.len() == 4 => {
                Value::from(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]).to_string())
            }
            (KeyType::Ipv6, EntryKey::Bytes(bytes)) if bytes.len() == 16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Value::from(Ipv6Addr::from(octets).to_string())
            }
            (_, EntryKey::Bytes(bytes)) => Value::from(
                bytes.iter().map(|byte| byte.to_string()).collect::<Vec<String>>().join("."),
            ),
        }
    }
}

/// Base64 of the JSON array of the raw key bytes.
pub fn key_fingerprint(raw: &[u8]) -> String {
    STANDARD.encode(serde_json::to_vec(raw).unwrap_or_default())
}
