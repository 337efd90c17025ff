use shared_types::PersonId;

use super::PersonService;
use super::dto::{CreatePersonRequestDTO, GetPersonResponseDTO};
use super::mapper::person_from_create_request;
use super::validator::validate_create_request;
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl PersonService {
    /// Validates the supplied person, calculates the price in the requested
    /// currency and saves the result.
    ///
    /// # Arguments
    ///
    /// * `request` - Name, phone and requested currency of the person to register
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn create_person(
        &self,
        request: CreatePersonRequestDTO,
    ) -> Result<PersonId, ServiceError> {
        validate_create_request(&request, &self.config.pricing).map_err(|error| {
            tracing::warn!(%error, "Person registration request failed validation");
            error
        })?;

        let price = self
            .exchange_rate_provider
            .convert(self.config.pricing.base_price, &request.currency)
            .await
            .map_err(|error| {
                tracing::warn!(%error, "Failed to convert the base price");
                error
            })?;

        // persistence failures are expected to be logged by the data layer
        let id = self
            .person_repository
            .create_person(person_from_create_request(request, price))
            .await?;

        Ok(id)
    }

    /// Returns details of a registered person
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing person
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn get_person(&self, id: &PersonId) -> Result<GetPersonResponseDTO, ServiceError> {
        let person = match self.person_repository.get_person(id).await {
            Ok(Some(person)) => person,
            Ok(None) | Err(DataLayerError::RecordNotFound) => {
                return Err(EntityNotFoundError::Person(*id).into());
            }
            Err(error) => return Err(error.into()),
        };

        Ok(person.into())
    }
}
