use thiserror::Error;

pub mod core_config;

#[cfg(test)]
mod test;

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: {0}")]
    GeneralParsingError(String),
    #[error(transparent)]
    Parsing(#[from] figment::Error),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Base price must be a positive amount, got `{0}`")]
    InvalidBasePrice(f64),
    #[error("Supported currency set must not be empty")]
    NoSupportedCurrencies,
}
