//! Stub of the remote boletas service used by the integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use boletas_admin::gateway::HttpGateway;
use boletas_admin::models::config::ServerConfig;
use serde_json::json;

async fn clients() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "id": "c1", "nome": "Maria Souza" },
        { "id": "c2", "nome": "João Lima" }
    ]))
}

async fn funds() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "id": "f1", "nome": "Fundo Alpha" },
        { "id": "f2", "nome": "Fundo Beta" }
    ]))
}

async fn situations() -> HttpResponse {
    HttpResponse::Ok().json(json!([
        { "id": 1, "nome": "Pendente" },
        { "id": 2, "nome": "Liquidada" }
    ]))
}

/// Answers every search with 25 boletas, ignoring the filters it receives.
async fn search() -> HttpResponse {
    let elements: Vec<_> = (1..=25)
        .map(|i| {
            let client = if i % 2 == 0 { "c2" } else { "c1" };
            let situation = if i <= 5 { 2 } else { 1 };
            let operation = if i % 5 == 0 { "RT" } else { "A" };
            json!({
                "codigo": i.to_string(),
                "idCliente": client,
                "idFundo": "f1",
                "idSituacao": situation,
                "tipoOperacao": operation,
                "dataOperacao": format!("2024-03-{i:02}T12:00:00"),
                "valorFinanceiro": i * 100
            })
        })
        .collect();
    HttpResponse::Ok().json(json!({ "elementos": elements }))
}

/// Starts the stub on an ephemeral port and returns its address.
pub fn spawn_upstream() -> SocketAddr {
    let server = HttpServer::new(|| {
        App::new()
            .route("/v1/clientes", web::get().to(clients))
            .route("/v1/fundos", web::get().to(funds))
            .route("/v1/situacoes", web::get().to(situations))
            .route(
                "/v1/boletas-cota-fundo/pesquisar",
                web::get().to(search),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("stub binds");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    addr
}

pub fn gateway(base_url: &str) -> HttpGateway {
    HttpGateway::new(base_url, Duration::from_secs(5)).expect("client builds")
}

pub fn server_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        default_page_size: 10,
    }
}
