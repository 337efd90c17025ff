use std::sync::Arc;

use crate::RegistryCore;
use crate::config::ConfigValidationError;
use crate::provider::exchange_rate::MockExchangeRateProvider;
use crate::repository::MockDataRepository;
use crate::repository::person_repository::MockPersonRepository;
use crate::service::error::ServiceError;
use crate::service::test_utilities::generic_config;

#[test]
fn test_core_construction_success() {
    let mut data_provider = MockDataRepository::default();

    data_provider
        .expect_get_person_repository()
        .once()
        .returning(|| Arc::new(MockPersonRepository::default()));

    let result = RegistryCore::new(
        generic_config().core,
        Arc::new(data_provider),
        Arc::new(MockExchangeRateProvider::default()),
    );

    assert!(result.is_ok());
}

#[test]
fn test_core_construction_failed_invalid_pricing() {
    let mut config = generic_config().core;
    config.pricing.base_price = -1.0;

    let result = RegistryCore::new(
        config,
        Arc::new(MockDataRepository::default()),
        Arc::new(MockExchangeRateProvider::default()),
    );

    assert!(matches!(
        result,
        Err(ServiceError::ConfigValidationError(
            ConfigValidationError::InvalidBasePrice(_)
        ))
    ));
}
