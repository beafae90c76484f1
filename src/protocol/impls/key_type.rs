use crate::protocol::enums::codec_error::CodecError;
use crate::protocol::enums::key_type::KeyType;

impl KeyType {
    pub fn from_wire(value: u64) -> Result<Self, CodecError> {
        match value {
            2 => Ok(KeyType::Sint),
            4 => Ok(KeyType::Ipv4),
            5 => Ok(KeyType::Ipv6),
            6 => Ok(KeyType::String),
            7 => Ok(KeyType::Binary),
            other => Err(CodecError::UnknownKeyType(other)),
        }
    }

    pub fn to_wire(self) -> u64 {
        match self {
            KeyType::Sint => 2,
            KeyType::Ipv4 => 4,
            KeyType::Ipv6 => 5,
            KeyType::String => 6,
            KeyType::Binary => 7,
        }
    }

    /// Name used by the presentation feed.
    pub fn label(self) -> &'static str {
        match self {
            KeyType::Sint => "integer",
            KeyType::Ipv4 => "ipv4",
            KeyType::Ipv6 => "ipv6",
            KeyType::String => "string",
            KeyType::Binary => "binary",
        }
    }
}
