use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RemotePeerConfig {
    pub name: String,
    pub address: String,
}
