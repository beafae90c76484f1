use std::collections::HashMap;
use std::hash::BuildHasher;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use crate::cache::structs::session_cache::SessionCache;
use crate::cache::structs::session_entry::SessionEntry;

impl SessionCache {
    /// The shard count is rounded up to a power of two.
    pub fn new(shard_count: usize, lifetime: Duration) -> SessionCache {
        let shard_count = shard_count.max(1).next_power_of_two();
        SessionCache {
            shards: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
            lifetime,
            hasher: ahash::RandomState::new(),
        }
    }

    fn shard(&self, key: &str) -> &Mutex<HashMap<String, SessionEntry>> {
        let index = (self.hasher.hash_one(key) as usize) & (self.shards.len() - 1);
        &self.shards[index]
    }

    /// Inserts or refreshes a session.
    pub fn set(&self, key: &str, route: &str) {
        self.set_at(key, route, Instant::now());
    }

    pub fn set_at(&self, key: &str, route: &str, now: Instant) {
        self.shard(key).lock().insert(key.to_string(), SessionEntry {
            route: route.to_string(),
            expires_at: now + self.lifetime,
        });
    }

    pub fn get(&self, key: &str) -> Option<SessionEntry> {
        self.shard(key).lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.shard(key).lock().contains_key(key)
    }

    /// Removes without triggering eviction.
    pub fn remove(&self, key: &str) -> Option<SessionEntry> {
        self.shard(key).lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every session whose deadline passed, oldest first.
    pub fn take_expired(&self, now: Instant) -> Vec<(String, String)> {
        let mut expired = Vec::new();
        for shard in &self.shards {
            let mut shard = shard.lock();
            shard.retain(|key, entry| {
                if entry.expires_at <= now {
                    expired.push((entry.expires_at, key.clone(), entry.route.clone()));
                    return false;
                }
                true
            });
        }
        expired.sort();
        expired.into_iter().map(|(_, key, route)| (key, route)).collect()
    }
}
