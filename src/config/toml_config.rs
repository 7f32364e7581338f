use crate::core::{ServiceClass, SessionSettings, TransportMode};
use crate::utils::error::{FareError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Regional coefficient used when nothing else is configured.
pub const DEFAULT_REGIONAL_COEFFICIENT: f64 = 1.1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_regional_coefficient")]
    pub regional_coefficient: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            regional_coefficient: DEFAULT_REGIONAL_COEFFICIENT,
        }
    }
}

fn default_regional_coefficient() -> f64 {
    DEFAULT_REGIONAL_COEFFICIENT
}

/// Values used when the command line leaves them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub mode: Option<TransportMode>,
    pub service_class: Option<ServiceClass>,
    pub passengers: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FareError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FareError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REGION_COEFFICIENT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FareError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn default_mode(&self) -> Option<TransportMode> {
        self.defaults.as_ref().and_then(|d| d.mode)
    }

    pub fn default_service_class(&self) -> Option<ServiceClass> {
        self.defaults.as_ref().and_then(|d| d.service_class)
    }

    pub fn default_passengers(&self) -> Option<u32> {
        self.defaults.as_ref().and_then(|d| d.passengers)
    }
}

impl SessionSettings for TomlConfig {
    fn regional_coefficient(&self) -> f64 {
        self.pricing.regional_coefficient
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_positive_finite(
            "pricing.regional_coefficient",
            self.pricing.regional_coefficient,
        )?;

        if self.default_passengers() == Some(0) {
            return Err(FareError::InvalidConfigValueError {
                field: "defaults.passengers".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
