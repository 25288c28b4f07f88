use crate::domain::client::{Client, ClientContact};
use crate::domain::types::ClientId;
use crate::forms::clients::{ClientLookupForm, ClientLookupPayload};
use crate::repository::ClientReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns every stored client; an empty table is reported as not found.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    let clients = repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err
    })?;

    if clients.is_empty() {
        return Err(ServiceError::NotFound);
    }

    Ok(clients)
}

/// Looks a client up by id and checks it has the requested type.
pub fn get_client_contact<R>(repo: &R, form: ClientLookupForm) -> ServiceResult<ClientContact>
where
    R: ClientReader + ?Sized,
{
    let ClientLookupPayload { id, client_type } = ClientLookupPayload::try_from(form)?;

    let Some(id) = id
        .parse::<i32>()
        .ok()
        .and_then(|id| ClientId::new(id).ok())
    else {
        return Err(ServiceError::NotFound);
    };

    let client = repo
        .get_client_by_id(id)
        .map_err(|err| {
            log::error!("Failed to get client {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    if client.client_type != client_type {
        return Err(ServiceError::TypeMismatch);
    }

    Ok(client.contact())
}
