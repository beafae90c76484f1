use std::collections::HashMap;
use std::time::Duration;
use parking_lot::Mutex;
use crate::cache::structs::session_entry::SessionEntry;

#[derive(Debug)]
pub struct SessionCache {
    pub shards: Vec<Mutex<HashMap<String, SessionEntry>>>,
    pub lifetime: Duration,
    pub(crate) hasher: ahash::RandomState,
}
