pub mod peer_connection;
pub mod peer_dispatch;
pub mod peer_handle;
pub mod peer_handshake;
