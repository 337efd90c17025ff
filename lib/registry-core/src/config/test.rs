use indoc::indoc;

use super::core_config::{AppConfig, NoCustomConfig, PricingConfig};
use super::{ConfigParsingError, ConfigValidationError};

#[test]
fn test_parse_yaml_config() {
    let config = indoc! {"
        pricing:
            basePrice: 25.5
            supportedCurrencies:
                - EUR
                - USD
    "};

    let config = AppConfig::<NoCustomConfig>::from_yaml_str(config).unwrap();

    let pricing = &config.core.pricing;
    assert_eq!(pricing.base_price, 25.5);
    assert_eq!(pricing.supported_currencies.len(), 2);
    assert!(pricing.supported_currencies.contains("EUR"));
    assert!(!pricing.supported_currencies.contains("AUD"));
}

#[test]
fn test_parse_yaml_config_currency_set_defaulted() {
    let config = indoc! {"
        pricing:
            basePrice: 100.0
    "};

    let config = AppConfig::<NoCustomConfig>::from_yaml_str(config).unwrap();

    let currencies = &config.core.pricing.supported_currencies;
    assert_eq!(currencies.len(), 4);
    for currency in ["AUD", "EUR", "GBP", "USD"] {
        assert!(currencies.contains(currency));
    }
}

#[test]
fn test_from_files_rejects_unknown_extension() {
    let result = AppConfig::<NoCustomConfig>::from_files(&["config.toml"]);

    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}

#[test]
fn test_validate_pricing_success() {
    assert!(PricingConfig::default().validate().is_ok());
}

#[test]
fn test_validate_pricing_rejects_non_positive_base_price() {
    let pricing = PricingConfig {
        base_price: 0.0,
        ..Default::default()
    };

    assert!(matches!(
        pricing.validate(),
        Err(ConfigValidationError::InvalidBasePrice(_))
    ));
}

#[test]
fn test_validate_pricing_rejects_empty_currency_set() {
    let pricing = PricingConfig {
        supported_currencies: Default::default(),
        ..Default::default()
    };

    assert!(matches!(
        pricing.validate(),
        Err(ConfigValidationError::NoSupportedCurrencies)
    ));
}
