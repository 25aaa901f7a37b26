use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::{http, web, App, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::cluster::structs::master::Master;

pub fn master_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn master_service_routes(data: Arc<Master>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(master_service_not_found));
        cfg.service(web::resource("/getWorker").route(web::get().to(master_service_get_worker)));
    })
}

/// Address of the least-loaded worker, or `503 {}` when none has announced one.
pub async fn master_service_get_worker(data: Data<Arc<Master>>) -> HttpResponse
{
    match data.free_worker() {
        Some(address) => {
            debug!("[MASTER] Discovery handed out {}", address);
            HttpResponse::Ok().content_type(ContentType::json()).json(address)
        }
        None => HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({})),
    }
}

pub async fn master_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

pub fn master_service(
    addr: SocketAddr,
    data: Arc<Master>,
) -> Result<(ServerHandle, Vec<SocketAddr>, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    info!("[MASTER] Starting discovery listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(master_service_cors())
            .configure(master_service_routes(data.clone()))
    })
        .workers(1)
        .bind((addr.ip(), addr.port()))?
        .disable_signals();
    let bound = server.addrs();
    let server = server.run();

    Ok((server.handle(), bound, server))
}
