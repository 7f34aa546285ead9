//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera};

use crate::forms::search::SearchTicketsForm;
use crate::services::ServiceError;

pub mod api;
pub mod main;

/// Parses the search form from the query string, allowing repeated keys.
pub fn search_form(req: &HttpRequest) -> Result<SearchTicketsForm, serde_html_form::de::Error> {
    serde_html_form::from_str(req.query_string())
}

/// HTTP status used to report a service failure.
pub fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::ReferenceDataLoad(_) | ServiceError::SearchLoad(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Form(_) => StatusCode::BAD_REQUEST,
        ServiceError::PageOutOfRange { .. } => StatusCode::NOT_FOUND,
    }
}

/// Context shared by every page.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Replaces the whole page with the user-facing message of `err`.
pub fn render_error(tera: &Tera, err: &ServiceError) -> HttpResponse {
    let mut context = base_context("index");
    context.insert("message", &err.user_message());
    render_template_with_status(tera, "main/error.html", &context, error_status(err))
}

/// Loads every template matching `pattern`.
pub fn build_tera(pattern: &str) -> tera::Result<Tera> {
    let tera = Tera::new(pattern)?;
    log::info!("Loaded {} templates", tera.get_template_names().count());
    Ok(tera)
}
