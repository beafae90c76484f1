use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web_actors::ws;
use log::info;
use serde_json::json;
use crate::web::structs::web_client::WebClient;
use crate::web::structs::web_service_data::WebServiceData;

pub fn web_service_routes(data: Arc<WebServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(web_service_not_found));
        cfg.service(web::resource("tables").route(web::get().to(web_service_tables_get)));
        cfg.service(web::resource("stats").route(web::get().to(web_service_stats_get)));
        cfg.service(web::resource("ws").route(web::get().to(web_service_ws)));
    })
}

pub async fn web_service_tables_get(data: Data<Arc<WebServiceData>>) -> HttpResponse
{
    let snapshot = data.registry.snapshot_json();
    HttpResponse::Ok().content_type(ContentType::json()).json(snapshot)
}

pub async fn web_service_stats_get(data: Data<Arc<WebServiceData>>) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::json()).json(data.registry.get_stats())
}

pub async fn web_service_ws(request: HttpRequest, stream: web::Payload, data: Data<Arc<WebServiceData>>) -> Result<HttpResponse, Error>
{
    ws::start(WebClient::new(data.get_ref().clone()), &request, stream)
}

pub async fn web_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

pub fn web_service(
    addr: SocketAddr,
    data: Arc<WebServiceData>,
) -> std::io::Result<(ServerHandle, impl Future<Output = Result<(), std::io::Error>>)>
{
    let config = data.registry.config.clone();
    info!("[WEB] Starting presentation server on {}", addr);

    let server = HttpServer::new(move || {
        App::new().configure(web_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.web.keep_alive))
        .workers(config.web.workers.max(1))
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}
