use std::sync::Arc;
use crate::web::structs::web_service_data::WebServiceData;

pub struct WebClient {
    pub data: Arc<WebServiceData>,
    /// Broadcaster slot, set once the actor has started.
    pub id: Option<u64>,
}
