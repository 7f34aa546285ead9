use actix_web::http::StatusCode;
use actix_web::{HttpRequest, Responder, get, web};
use tera::Tera;

use crate::gateway::HttpGateway;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, render_error, render_template_with_status, search_form};
use crate::services::ServiceError;
use crate::services::search::load_search_page;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    gateway: web::Data<HttpGateway>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = match search_form(&req) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Failed to parse search query: {err}");
            return render_error(&tera, &ServiceError::Form(err.to_string()));
        }
    };

    let data = match load_search_page(gateway.get_ref(), &form, server_config.default_page_size)
        .await
    {
        Ok(data) => data,
        Err(err) => return render_error(&tera, &err),
    };

    let status = if data.form_error.is_some() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    let selected_statuses: Vec<String> = data
        .draft
        .statuses
        .iter()
        .map(|s| s.to_string())
        .collect();
    let selected_operation_types: Vec<String> = data
        .draft
        .operation_types
        .iter()
        .map(|op| op.code().to_string())
        .collect();

    let mut context = base_context("index");
    context.insert("options", &data.options);
    context.insert("draft", &data.draft);
    context.insert("selected_statuses", &selected_statuses);
    context.insert("selected_operation_types", &selected_operation_types);
    context.insert("value_min_display", &data.draft.value_min_display());
    context.insert("value_max_display", &data.draft.value_max_display());
    context.insert("tickets", &data.tickets);
    context.insert("form_error", &data.form_error);
    context.insert("query", &data.query);
    context.insert(
        "per_page",
        &form.per_page.unwrap_or(server_config.default_page_size),
    );

    render_template_with_status(&tera, "main/index.html", &context, status)
}
