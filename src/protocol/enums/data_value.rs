use serde::{Deserialize, Serialize};

/// A single stored value. The variant follows the wire shape of its data type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    Scalar(u64),
    Rate {
        tick: u64,
        current: u64,
        previous: u64,
    },
    Server {
        id: u64,
        x: u64,
        y: u64,
        name: Vec<u64>,
    },
}
