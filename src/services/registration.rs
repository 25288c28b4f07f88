//! Client registration: validate, check the natural key, insert, store photo.

use std::path::PathBuf;

use crate::domain::image::ImageLayout;
use crate::domain::types::ClientId;
use crate::forms::clients::{RegisterClientInput, RegisterClientPayload};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::storage::FileStore;

/// Result of a registration that created a client row.
///
/// The row is authoritative: a failed photo write never undoes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Created { id: ClientId, image_path: PathBuf },
    CreatedImageFailed { id: ClientId, image_path: PathBuf },
}

impl RegistrationOutcome {
    pub fn id(&self) -> ClientId {
        match self {
            Self::Created { id, .. } | Self::CreatedImageFailed { id, .. } => *id,
        }
    }

    pub fn image_path(&self) -> &PathBuf {
        match self {
            Self::Created { image_path, .. } | Self::CreatedImageFailed { image_path, .. } => {
                image_path
            }
        }
    }

    pub fn image_stored(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Created { .. } => "Cliente registrado exitosamente.",
            Self::CreatedImageFailed { .. } => {
                "Cliente registrado exitosamente, pero hubo un problema al guardar la imagen."
            }
        }
    }
}

/// Registers a new client and stores its photo.
///
/// The duplicate check and the insert are two separate repository calls, so
/// two concurrent requests for the same name, surname and type may both pass.
pub fn register_client<R, S>(
    repo: &R,
    store: &S,
    layout: &ImageLayout,
    input: RegisterClientInput,
) -> ServiceResult<RegistrationOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
    S: FileStore + ?Sized,
{
    let RegisterClientPayload { client, image } = RegisterClientPayload::try_from(input)?;

    let key = client.key();
    if repo.client_exists(&key).map_err(|err| {
        log::error!("Failed to check for an existing client: {err}");
        err
    })? {
        return Err(ServiceError::Duplicate(key));
    }

    let id = match repo.create_client(&client) {
        Ok(Some(id)) => id,
        Ok(None) => {
            log::error!("Client insert returned no id");
            return Err(ServiceError::ClientNotCreated);
        }
        Err(err) => {
            log::error!("Failed to create client: {err}");
            return Err(ServiceError::ClientNotCreated);
        }
    };

    let image_path = layout.path_for(id, client.client_type);

    match store.write(&image_path, &image.bytes) {
        Ok(()) => {
            log::info!("Registered client {id} with photo {}", image_path.display());
            Ok(RegistrationOutcome::Created { id, image_path })
        }
        Err(err) => {
            log::warn!("Registered client {id} but could not store photo: {err}");
            Ok(RegistrationOutcome::CreatedImageFailed { id, image_path })
        }
    }
}
