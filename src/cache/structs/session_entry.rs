use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub route: String,
    pub expires_at: Instant,
}
