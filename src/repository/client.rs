use diesel::prelude::*;

use crate::domain::client::{Client, ClientKey, NewClient};
use crate::domain::types::ClientId;
use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, DieselRepository};
use crate::schema::clients;

impl ClientReader for DieselRepository {
    fn client_exists(&self, key: &ClientKey) -> RepositoryResult<bool> {
        let mut conn = self.pool().get()?;

        let exists = diesel::select(diesel::dsl::exists(
            clients::table
                .filter(clients::name.eq(key.name.as_str()))
                .filter(clients::surname.eq(key.surname.as_str()))
                .filter(clients::client_type.eq(key.client_type.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let mut conn = self.pool().get()?;

        let client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        match client {
            Some(client) => Ok(Some(Client::try_from(client)?)),
            None => Ok(None),
        }
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        let mut conn = self.pool().get()?;

        let clients = clients::table
            .order(clients::id.asc())
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        clients
            .into_iter()
            .map(|client| Client::try_from(client).map_err(RepositoryError::from))
            .collect()
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Option<ClientId>> {
        let mut conn = self.pool().get()?;
        let insertable: DbNewClient = new_client.into();

        let id = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(clients::id)
            .get_result::<i32>(&mut conn)
            .optional()?;

        Ok(id.and_then(|id| ClientId::new(id).ok()))
    }
}
