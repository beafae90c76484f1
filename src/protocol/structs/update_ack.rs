use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAck {
    pub stick_table_id: u64,
    pub update_id: u32,
}
