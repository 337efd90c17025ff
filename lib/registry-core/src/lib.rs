use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::exchange_rate::ExchangeRateProvider;
use repository::DataRepository;
use service::error::ServiceError;
use service::person::PersonService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

pub struct RegistryCore {
    pub person_service: PersonService,
}

impl RegistryCore {
    pub fn new(
        core_config: CoreConfig,
        data_provider: Arc<dyn DataRepository>,
        exchange_rate_provider: Arc<dyn ExchangeRateProvider>,
    ) -> Result<RegistryCore, ServiceError> {
        core_config.pricing.validate()?;

        let config = Arc::new(core_config);

        Ok(RegistryCore {
            person_service: PersonService::new(
                data_provider.get_person_repository(),
                exchange_rate_provider,
                config,
            ),
        })
    }
}

#[cfg(test)]
mod test;
