//! Persistence boundary for client records.

use crate::{
    db::DbPool,
    domain::{
        client::{Client, ClientKey, NewClient},
        types::ClientId,
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository shared by every request handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub trait ClientReader {
    /// Whether a client with the same natural key is already stored.
    ///
    /// This is a plain read: a concurrent insert between this check and
    /// [`ClientWriter::create_client`] can still produce a duplicate row.
    fn client_exists(&self, key: &ClientKey) -> RepositoryResult<bool>;
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    /// Inserts the client and returns its identity, or `None` when the store
    /// accepted the write without yielding one.
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Option<ClientId>>;
}
