/// Suppression of our own room table updates echoed back by a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoState {
    Normal,
    /// Ack and discard the next entry update for this table.
    SkipNextEntryUpdateFor(String),
}
