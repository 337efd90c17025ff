use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::exchange_rate::ExchangeRateProvider;
use crate::repository::person_repository::PersonRepository;

pub mod dto;
mod mapper;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct PersonService {
    person_repository: Arc<dyn PersonRepository>,
    exchange_rate_provider: Arc<dyn ExchangeRateProvider>,
    config: Arc<CoreConfig>,
}

impl PersonService {
    pub fn new(
        person_repository: Arc<dyn PersonRepository>,
        exchange_rate_provider: Arc<dyn ExchangeRateProvider>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            person_repository,
            exchange_rate_provider,
            config,
        }
    }
}
