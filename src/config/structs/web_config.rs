use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WebConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Messages queued per live feed client before new ones are dropped.
    pub client_buffer: usize,
    pub workers: usize,
    pub keep_alive: u64,
}
