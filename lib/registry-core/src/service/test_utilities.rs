use indoc::indoc;
use serde::{Deserialize, Serialize};
use shared_types::PersonId;
use time::OffsetDateTime;

use crate::config::core_config::AppConfig;
use crate::model::person::Person;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfig {}

pub fn generic_config() -> AppConfig<CustomConfig> {
    let config = indoc! {"
        pricing:
            basePrice: 100.0
            supportedCurrencies:
                - AUD
                - EUR
                - GBP
                - USD
    "};

    AppConfig::from_yaml_str(config).expect("failed to parse test config")
}

pub fn generic_person(id: impl Into<PersonId>) -> Person {
    let now = OffsetDateTime::now_utc();

    Person {
        id: id.into(),
        full_name: "Jo Black".to_string(),
        phone: "0123456789".to_string(),
        currency: "USD".to_string(),
        price: 100.0,
        created_date: now,
        last_modified: now,
    }
}
