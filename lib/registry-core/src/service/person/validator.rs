use super::dto::CreatePersonRequestDTO;
use crate::config::core_config::PricingConfig;
use crate::service::error::ValidationError;

// check order is part of the contract: name, phone, currency presence, currency validity
pub(crate) fn validate_create_request(
    request: &CreatePersonRequestDTO,
    pricing: &PricingConfig,
) -> Result<(), ValidationError> {
    if request.full_name.is_empty() {
        return Err(ValidationError::NameMissing);
    }

    if request.phone.is_empty() {
        return Err(ValidationError::PhoneMissing);
    }

    if request.currency.is_empty() {
        return Err(ValidationError::CurrencyMissing);
    }

    if !pricing.supported_currencies.contains(&request.currency) {
        return Err(ValidationError::UnsupportedCurrency(
            request.currency.to_owned(),
        ));
    }

    Ok(())
}
