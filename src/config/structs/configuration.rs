use serde::{Deserialize, Serialize};
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::vwr_config::VwrConfig;
use crate::config::structs::web_config::WebConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub peer: PeerConfig,
    pub web: WebConfig,
    pub vwr: VwrConfig,
}
