#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::gateway::HttpGateway;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::{api::api_v1_tickets, build_tera, main::show_index};

pub mod currency;
pub mod domain;
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
pub mod filter;
pub mod forms;
#[cfg(feature = "server")]
pub mod gateway;
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let gateway = HttpGateway::new(
        server_config.api_base_url.clone(),
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    let tera = build_tera(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving boletas from {} on {}:{}",
        gateway.base_url(),
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(api_v1_tickets),
            )
            .service(show_index)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(gateway.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
