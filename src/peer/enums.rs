pub mod connection_state;
pub mod echo_state;
pub mod peer_error;
pub mod peer_role;
