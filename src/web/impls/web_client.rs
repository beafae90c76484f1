use std::sync::Arc;
use actix::prelude::*;
use actix_web_actors::ws;
use log::{debug, warn};
use crate::web::structs::web_client::WebClient;
use crate::web::structs::web_message::WebMessage;
use crate::web::structs::web_service_data::WebServiceData;

impl WebClient {
    pub fn new(data: Arc<WebServiceData>) -> WebClient {
        WebClient { data, id: None }
    }
}

impl Actor for WebClient {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.set_mailbox_capacity(self.data.registry.config.web.client_buffer);
        let id = self.data.broadcaster.register(ctx.address().recipient());
        self.id = Some(id);
        ctx.text(self.data.registry.snapshot_json().to_string());
        debug!("[WEB] Client #{id} connected");
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(id) = self.id.take() {
            self.data.broadcaster.unregister(id);
            debug!("[WEB] Client #{id} disconnected");
        }
    }
}

impl Handler<WebMessage> for WebClient {
    type Result = ();

    fn handle(&mut self, message: WebMessage, ctx: &mut Self::Context) {
        ctx.text(message.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WebClient {
    fn handle(&mut self, message: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match message {
            Ok(ws::Message::Ping(payload)) => ctx.pong(&payload),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => {}
            Err(error) => {
                warn!("[WEB] WebSocket error: {error}");
                ctx.stop();
            }
        }
    }
}
