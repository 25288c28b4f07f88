//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, ClientKey, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn client_exists(&self, key: &ClientKey) -> RepositoryResult<bool>;
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Option<ClientId>>;
    }
}
