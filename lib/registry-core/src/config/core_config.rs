use std::collections::BTreeSet;
use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{ConfigParsingError, ConfigValidationError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    #[serde(alias = "base_price")]
    pub base_price: f64,
    #[serde(
        default = "default_supported_currencies",
        alias = "supported_currencies"
    )]
    pub supported_currencies: BTreeSet<String>,
}

fn default_supported_currencies() -> BTreeSet<String> {
    BTreeSet::from(["AUD", "EUR", "GBP", "USD"].map(String::from))
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 100.0,
            supported_currencies: default_supported_currencies(),
        }
    }
}

impl PricingConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(ConfigValidationError::InvalidBasePrice(self.base_price));
        }

        if self.supported_currencies.is_empty() {
            return Err(ConfigValidationError::NoSupportedCurrencies);
        }

        Ok(())
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        Self::from_inputs(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml_str(s: impl AsRef<str>) -> Result<Self, ConfigParsingError> {
        Self::from_inputs(vec![InputFormat::yaml_str(s)])
    }

    pub fn from_inputs(inputs: Vec<InputFormat>) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for input in inputs {
            figment = match input {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(data) => figment.merge(data),
                #[cfg(feature = "config_json")]
                InputFormat::Json(data) => figment.merge(data),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("REGISTRY__").split("__"));
        }

        let core: CoreConfig = figment.extract()?;
        let custom: AppCustomConfigSerdeDTO<Custom> = figment.extract()?;

        Ok(AppConfig {
            core,
            app: custom.app,
        })
    }
}
