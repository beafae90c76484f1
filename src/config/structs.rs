pub mod configuration;
pub mod peer_config;
pub mod remote_peer_config;
pub mod route_config;
pub mod vwr_config;
pub mod web_config;
