pub mod session_cache;
pub mod session_entry;
