use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeRateProviderError {
    #[error("Exchange rate lookup failure: `{0}`")]
    Failed(String),
    #[error("Unknown currency: `{0}`")]
    UnknownCurrency(String),
    #[error("Transport error: `{0}`")]
    Transport(anyhow::Error),
}
