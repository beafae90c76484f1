use crate::store::structs::propagation::{PeerFrame, Propagation};

impl Propagation {
    pub fn to_peers(&mut self, bytes: Vec<u8>, except: Option<u64>) {
        self.frames.push(PeerFrame { bytes, except });
    }

    pub fn publish(&mut self, table: &str, fingerprint: &str) {
        self.entries.push((table.to_string(), fingerprint.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.entries.is_empty() && !self.snapshot
    }
}
