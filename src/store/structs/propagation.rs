/// Encoded frame for the active peers, optionally skipping one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerFrame {
    pub bytes: Vec<u8>,
    pub except: Option<u64>,
}

/// Side effects of applying an update, executed after all locks are released.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Propagation {
    pub frames: Vec<PeerFrame>,
    /// `(table, fingerprint)` pairs for the presentation feed.
    pub entries: Vec<(String, String)>,
    pub snapshot: bool,
}
