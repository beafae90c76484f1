pub mod codec_error;
pub mod data_type_kind;
pub mod data_value;
pub mod entry_key;
pub mod frame_error;
pub mod key_type;
