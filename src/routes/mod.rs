//! Actix-web handlers for the client API.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::dto::api::ErrorResponse;

pub mod clients;

pub const DATABASE_ERROR_MESSAGE: &str = "Error en la base de datos";

/// Builds a JSON `{"error": ...}` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}
