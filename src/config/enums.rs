pub mod configuration_error;
pub mod replication_mode;
