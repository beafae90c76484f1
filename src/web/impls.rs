pub mod broadcaster;
pub mod web_client;
