use std::sync::Arc;
use crate::store::structs::registry::Registry;
use crate::web::structs::broadcaster::Broadcaster;

pub struct WebServiceData {
    pub registry: Arc<Registry>,
    pub broadcaster: Arc<Broadcaster>,
}
