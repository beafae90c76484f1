use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub active_users: u64,
    pub path: String,
    pub host: String,
}
