//! HTTP handlers rendering the product catalog pages.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::web;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod products;

/// Renders `template` with the given status, falling back to a bare 500 when
/// the template cannot be rendered.
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

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

/// Page shown for any path or record that does not exist.
pub fn render_not_found(tera: &Tera) -> HttpResponse {
    render_template_with_status(
        tera,
        "errors/404.html",
        &Context::new(),
        StatusCode::NOT_FOUND,
    )
}

/// Maps a service failure to the response shown to the user.
pub fn error_response(tera: &Tera, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => render_not_found(tera),
        ServiceError::InvalidRequest(message) => {
            log::warn!("Rejected request: {message}");
            HttpResponse::UnprocessableEntity().finish()
        }
        other => {
            log::error!("Request failed: {other}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Fallback service for unknown paths.
pub async fn not_found(tera: web::Data<Tera>) -> HttpResponse {
    render_not_found(&tera)
}
