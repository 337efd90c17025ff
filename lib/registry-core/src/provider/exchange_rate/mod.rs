use error::ExchangeRateProviderError;

pub mod error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Converts `amount` into the requested currency at the provider's current rate.
    async fn convert(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<f64, ExchangeRateProviderError>;
}
