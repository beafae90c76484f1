pub mod data_type_kind;
pub mod data_value;
pub mod entry_key;
pub mod entry_update;
pub mod frame_reader;
pub mod key_type;
pub mod payload_cursor;
pub mod table_definition;
pub mod update_ack;
