#[cfg(test)]
mod web_tests {
    use std::sync::Arc;
    use actix::prelude::*;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::store::structs::registry::Registry;
    use crate::web::structs::broadcaster::Broadcaster;
    use crate::web::structs::web_message::WebMessage;
    use crate::web::structs::web_service_data::WebServiceData;

    struct Collector {
        received: Arc<parking_lot::Mutex<Vec<String>>>,
    }

    impl Actor for Collector {
        type Context = Context<Self>;
    }

    impl Handler<WebMessage> for Collector {
        type Result = ();

        fn handle(&mut self, message: WebMessage, _ctx: &mut Self::Context) {
            self.received.lock().push(message.0);
        }
    }

    fn service_data() -> Arc<WebServiceData> {
        let stats = Arc::new(StatsAtomics::new());
        let broadcaster = Arc::new(Broadcaster::new(stats.clone()));
        let registry = Arc::new(Registry::new(Arc::new(Configuration::init()), broadcaster.clone(), stats));
        Arc::new(WebServiceData { registry, broadcaster })
    }

    mod broadcaster_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use actix::prelude::*;
        use crate::stats::structs::stats_atomics::StatsAtomics;
        use crate::store::traits::presentation_sink::PresentationSink;
        use crate::web::structs::broadcaster::Broadcaster;
        use super::Collector;

        #[actix_web::test]
        async fn test_dispatch_reaches_clients() {
            let stats = Arc::new(StatsAtomics::new());
            let broadcaster = Broadcaster::new(stats.clone());
            assert!(!broadcaster.has_listeners());

            let received = Arc::new(parking_lot::Mutex::new(Vec::new()));
            let collector = Collector { received: received.clone() }.start();
            let id = broadcaster.register(collector.recipient());
            assert!(broadcaster.has_listeners());

            broadcaster.publish_update("users", "x", String::from("{\"mode\":\"update\"}"));
            actix_web::rt::time::sleep(Duration::from_millis(50)).await;
            assert_eq!(*received.lock(), vec![String::from("{\"mode\":\"update\"}")]);
            assert_eq!(stats.snapshot().web_messages_sent, 1);

            broadcaster.unregister(id);
            assert_eq!(broadcaster.client_count(), 0);
            assert_eq!(stats.snapshot().web_clients, 0);
        }

        #[actix_web::test]
        async fn test_full_mailbox_drops_messages() {
            let stats = Arc::new(StatsAtomics::new());
            let broadcaster = Broadcaster::new(stats.clone());
            let received = Arc::new(parking_lot::Mutex::new(Vec::new()));
            let collector = Collector::create(|ctx| {
                ctx.set_mailbox_capacity(1);
                Collector { received: received.clone() }
            });
            broadcaster.register(collector.recipient());

            for _ in 0..20 {
                broadcaster.dispatch("{}");
            }
            let snapshot = stats.snapshot();
            assert!(snapshot.web_messages_dropped > 0);
            assert_eq!(snapshot.web_messages_sent + snapshot.web_messages_dropped, 20);
        }
    }

    mod route_tests {
        use actix_web::{test, App};
        use crate::config::enums::replication_mode::ReplicationMode;
        use crate::web::web::web_service_routes;
        use super::service_data;

        #[actix_web::test]
        async fn test_tables_snapshot() {
            let data = service_data();
            assert_eq!(data.registry.config.peer.mode, ReplicationMode::agg);
            data.registry.bootstrap_rooms();
            let app = test::init_service(App::new().configure(web_service_routes(data.clone()))).await;

            let request = test::TestRequest::get().uri("/tables").to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
            assert_eq!(body["mode"], "tables");
            assert_eq!(body["room"]["type"], "string");
            assert_eq!(body["room"]["entries"][0]["key"], "site");
            assert_eq!(body["room"]["entries"][0]["value"], "100\t");
        }

        #[actix_web::test]
        async fn test_stats() {
            let data = service_data();
            let app = test::init_service(App::new().configure(web_service_routes(data))).await;
            let request = test::TestRequest::get().uri("/stats").to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
            assert_eq!(body["peers_active"], 0);
            assert_eq!(body["web_clients"], 0);
        }

        #[actix_web::test]
        async fn test_unknown_route() {
            let app = test::init_service(App::new().configure(web_service_routes(service_data()))).await;
            let request = test::TestRequest::get().uri("/nope").to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        }
    }
}
