use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::image::ImageLayout;
use crate::dto::api::{ClientContactDto, ClientDto, MessageResponse};
use crate::forms::clients::{ClientLookupForm, RegisterClientForm};
use crate::repository::DieselRepository;
use crate::routes::{DATABASE_ERROR_MESSAGE, error_response};
use crate::services::{ServiceError, clients as clients_service, registration};
use crate::storage::LocalFileStore;

#[post("/clientes")]
pub async fn register_client(
    repo: web::Data<DieselRepository>,
    store: web::Data<LocalFileStore>,
    layout: web::Data<ImageLayout>,
    MultipartForm(form): MultipartForm<RegisterClientForm>,
) -> impl Responder {
    let input = match form.into_input() {
        Ok(input) => input,
        Err(err) => {
            log::error!("Failed to read uploaded photo: {err}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "No se pudo leer la imagen");
        }
    };

    match registration::register_client(repo.get_ref(), store.get_ref(), layout.get_ref(), input)
    {
        Ok(outcome) => HttpResponse::Created().json(MessageResponse {
            mensaje: outcome.message().to_string(),
        }),
        Err(err @ (ServiceError::Form(_) | ServiceError::Duplicate(_))) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(err @ ServiceError::ClientNotCreated) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(err) => {
            log::error!("Failed to register client: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE)
        }
    }
}

#[get("/clientes")]
pub async fn list_clients(repo: web::Data<DieselRepository>) -> impl Responder {
    match clients_service::list_clients(repo.get_ref()) {
        Ok(clients) => {
            HttpResponse::Ok().json(clients.iter().map(ClientDto::from).collect::<Vec<_>>())
        }
        Err(ServiceError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "No se encontraron clientes")
        }
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE),
    }
}

#[get("/clientes/consultar")]
pub async fn show_client_contact(
    repo: web::Data<DieselRepository>,
    web::Query(params): web::Query<ClientLookupForm>,
) -> impl Responder {
    match clients_service::get_client_contact(repo.get_ref(), params) {
        Ok(contact) => HttpResponse::Ok().json(ClientContactDto::from(contact)),
        Err(ServiceError::Form(err)) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
        Err(ServiceError::NotFound) => error_response(
            StatusCode::NOT_FOUND,
            "No se encontró el cliente con el ID y tipo proporcionados.",
        ),
        // Reported with 200 for compatibility with existing consumers.
        Err(err @ ServiceError::TypeMismatch) => error_response(StatusCode::OK, err.to_string()),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR_MESSAGE),
    }
}
