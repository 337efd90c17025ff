use shared_types::PersonId;

use super::error::DataLayerError;
use crate::model::person::{CreatePersonRequest, Person};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create_person(
        &self,
        request: CreatePersonRequest,
    ) -> Result<PersonId, DataLayerError>;

    async fn get_person(&self, id: &PersonId) -> Result<Option<Person>, DataLayerError>;
}
