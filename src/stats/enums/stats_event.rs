use serde::{Deserialize, Serialize};

/// Counters that can be moved with `update_stats()`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    PeersConnected,
    PeersActive,
    HandshakesFailed,
    TableDefinitions,
    EntryUpdates,
    UpdateAcksSent,
    UpdateAcksReceived,
    DecodeErrors,
    SessionsAdmitted,
    SessionsQueued,
    SessionsExpired,
    SessionsPromoted,
    WebClients,
    WebMessagesSent,
    WebMessagesDropped,
}
