use thiserror::Error;
use crate::protocol::enums::data_type_kind::DataTypeKind;
use crate::protocol::enums::key_type::KeyType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("insufficient data")]
    Incomplete,
    #[error("varint does not fit in 64 bits")]
    VarintOverflow,
    #[error("record truncated while reading {0}")]
    Truncated(&'static str),
    #[error("unknown key type {0}")]
    UnknownKeyType(u64),
    #[error("key type {0:?} is not supported")]
    UnsupportedKeyType(KeyType),
    #[error("key does not match table key type {0:?}")]
    KeyMismatch(KeyType),
    #[error("invalid utf-8 in {0}")]
    InvalidUtf8(&'static str),
    #[error("value does not match data type {0:?}")]
    ValueMismatch(DataTypeKind),
}
