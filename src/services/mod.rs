//! Business operations invoked by the HTTP handlers.
//!
//! Services take their collaborators as trait objects or generics so they can
//! be exercised against mocks; nothing here knows about Actix.

use thiserror::Error;

use crate::domain::client::ClientKey;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod clients;
pub mod registration;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input; carries the first violated rule.
    #[error(transparent)]
    Form(#[from] FormError),

    /// A client with the same natural key already exists.
    #[error(
        "Ya existe el cliente: {} {} y tipo {}",
        .0.name,
        .0.surname,
        .0.client_type
    )]
    Duplicate(ClientKey),

    /// The repository did not return an identity for the new record.
    #[error("No se pudo crear el cliente")]
    ClientNotCreated,

    #[error("not found")]
    NotFound,

    /// The record exists but under a different client type.
    #[error("Tipo de cliente incorrecto")]
    TypeMismatch,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
