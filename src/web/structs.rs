pub mod web_message;
pub mod broadcaster;
pub mod web_client;
pub mod web_service_data;
