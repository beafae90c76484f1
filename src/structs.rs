use clap::Parser;
use crate::config::enums::replication_mode::ReplicationMode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Write haproxy.cfg for the configured routes and exit.
    #[arg(long)]
    pub haproxy_config: bool,
    /// Overrides the replication mode of the configuration file.
    #[arg(long, value_enum)]
    pub mode: Option<ReplicationMode>,
}
