use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{http, web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use actix_web_actors::ws;
use log::info;
use serde_json::json;
use crate::viewhub::structs::hub_socket::HubSocket;
use crate::viewhub::structs::view_hub::ViewHub;

pub fn viewhub_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn viewhub_service_routes(data: Arc<ViewHub>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(viewhub_service_not_found));
        cfg.service(web::resource("/viewhub").route(web::get().to(viewhub_websocket_handler)));
    })
}

pub async fn viewhub_websocket_handler(
    req: HttpRequest,
    stream: web::Payload,
    data: Data<Arc<ViewHub>>,
) -> Result<HttpResponse, Error>
{
    ws::start(HubSocket::new(data.get_ref().clone()), &req, stream)
}

pub async fn viewhub_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

/// Serves `/viewhub`, over TLS when `tls_config` is given.
pub fn viewhub_service(
    addr: SocketAddr,
    data: Arc<ViewHub>,
    tls_config: Option<rustls::ServerConfig>,
) -> Result<(ServerHandle, Vec<SocketAddr>, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let server = HttpServer::new(move || {
        App::new()
            .wrap(viewhub_service_cors())
            .configure(viewhub_service_routes(data.clone()))
    })
        .disable_signals();
    let server = match tls_config {
        Some(tls_config) => {
            info!("[VIEWHUB] Starting WSS server on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[VIEWHUB] Starting WS server on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    };
    let bound = server.addrs();
    let server = server.run();

    Ok((server.handle(), bound, server))
}
