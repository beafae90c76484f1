#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerRole {
    /// Remote dialed us and speaks first.
    Accept,
    /// We dialed `remote_name` and send the greeting.
    Initiate { remote_name: String },
}
