//! main file for the server

pub mod controller;
pub mod database;
pub mod fallback;
pub mod model;
pub mod state;
mod util;

use crate::server::controller::diagnostics::{index, test_database};
use crate::server::controller::info::get_info;
use crate::server::controller::menu::get_menu;
use crate::server::controller::reservations::create_reservation;
use crate::server::controller::testimonials::get_testimonials;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use serde_json::json;

/// Run the server
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let addr = config.addr;
    let state = web::Data::new(AppState::init(&config).await);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(json_config())
            .service(index)
            .service(test_database)
            .service(get_info)
            .service(get_menu)
            .service(create_reservation)
            .service(get_testimonials)
    })
    .bind(addr)?
    .run()
    .await
}

/// Body deserialization failures (missing field, wrong type) surface with
/// the same 422 shape as range violations.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body)).into()
    })
}
