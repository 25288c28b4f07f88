//! JSON bodies exposed by the client API endpoints.

use serde::Serialize;

use crate::domain::client::{Client, ClientContact};

/// Client row as returned by `GET /clientes`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub tipo_documento: String,
    pub nro_documento: String,
    pub tipo: String,
    pub pais: String,
    pub ciudad: String,
    pub email: String,
    pub telefono: String,
    pub modalidad_pago: String,
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.get(),
            nombre: client.name.to_string(),
            apellido: client.surname.to_string(),
            tipo_documento: client.document_type.to_string(),
            nro_documento: client.document_number.to_string(),
            tipo: client.client_type.to_string(),
            pais: client.country.to_string(),
            ciudad: client.city.to_string(),
            email: client.email.to_string(),
            telefono: client.phone.to_string(),
            modalidad_pago: client.payment_method.to_string(),
        }
    }
}

/// Body of a successful `GET /clientes/consultar`.
#[derive(Debug, Serialize)]
pub struct ClientContactDto {
    pub pais: String,
    pub ciudad: String,
    pub telefono: String,
}

impl From<ClientContact> for ClientContactDto {
    fn from(contact: ClientContact) -> Self {
        Self {
            pais: contact.country.into_inner(),
            ciudad: contact.city.into_inner(),
            telefono: contact.phone.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
