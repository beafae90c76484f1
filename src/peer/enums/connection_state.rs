#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    AwaitingGreeting,
    AwaitingRemoteId,
    AwaitingPeerInfo,
    Active,
    Closed,
}
