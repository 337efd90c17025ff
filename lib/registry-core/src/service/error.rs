use shared_types::PersonId;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::exchange_rate::error::ExchangeRateProviderError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Config validation error `{0}`")]
    ConfigValidationError(#[from] ConfigValidationError),

    #[error("Exchange rate provider error: `{0}`")]
    ExchangeRateProvider(#[from] ExchangeRateProviderError),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Person `{0}` not found")]
    Person(PersonId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("name is missing")]
    NameMissing,
    #[error("phone is missing")]
    PhoneMissing,
    #[error("currency is missing")]
    CurrencyMissing,
    #[error("currency `{0}` is not supported")]
    UnsupportedCurrency(String),
}

#[derive(Debug)]
pub enum ErrorCode {
    Person001,

    Validation001,
    Validation002,
    Validation003,
    Validation004,

    Exchange001,

    Database,

    Unmapped,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Person001 => "Person not found",

            ErrorCode::Validation001 => "Name missing",
            ErrorCode::Validation002 => "Phone missing",
            ErrorCode::Validation003 => "Currency missing",
            ErrorCode::Validation004 => "Currency not supported",

            ErrorCode::Exchange001 => "Exchange rate unavailable",

            ErrorCode::Database => "Database error",

            ErrorCode::Unmapped => "Unmapped error code",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::ExchangeRateProvider(_) => ErrorCode::Exchange001,

            ServiceError::ConfigValidationError(_) | ServiceError::NotFound => ErrorCode::Unmapped,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Person(_) => ErrorCode::Person001,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::NameMissing => ErrorCode::Validation001,
            ValidationError::PhoneMissing => ErrorCode::Validation002,
            ValidationError::CurrencyMissing => ErrorCode::Validation003,
            ValidationError::UnsupportedCurrency(_) => ErrorCode::Validation004,
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        match value {
            DataLayerError::RecordNotFound => ServiceError::NotFound,
            DataLayerError::AlreadyExists | DataLayerError::MappingError | DataLayerError::Db(_) => {
                Self::Repository(value)
            }
        }
    }
}
