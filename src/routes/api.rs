use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::api::ErrorResponse;
use crate::gateway::HttpGateway;
use crate::models::config::ServerConfig;
use crate::routes::{error_status, search_form};
use crate::services::ServiceError;
use crate::services::api::list_tickets;

fn error_response(err: &ServiceError) -> HttpResponse {
    HttpResponse::build(error_status(err)).json(ErrorResponse {
        error: err.user_message(),
    })
}

#[get("/v1/boletas")]
pub async fn api_v1_tickets(
    req: HttpRequest,
    gateway: web::Data<HttpGateway>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let form = match search_form(&req) {
        Ok(form) => form,
        Err(err) => return error_response(&ServiceError::Form(err.to_string())),
    };

    match list_tickets(gateway.get_ref(), &form, server_config.default_page_size).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => error_response(&err),
    }
}
