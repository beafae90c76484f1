pub mod configuration;
pub mod replication_mode;
