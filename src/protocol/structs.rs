pub mod entry_update;
pub mod frame_reader;
pub mod payload_cursor;
pub mod table_definition;
pub mod update_ack;
