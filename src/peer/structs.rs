pub mod peer_connection;
pub mod peer_handle;
