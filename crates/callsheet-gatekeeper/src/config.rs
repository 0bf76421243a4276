//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Limits applied by the validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum description length, in characters
    pub min_description_chars: usize,

    /// Maximum first/last name length
    pub max_name_chars: usize,

    /// Maximum address length
    pub max_address_chars: usize,

    /// Maximum length of height, weight and gender
    pub max_attribute_chars: usize,

    /// Youngest accepted age
    pub min_age: u32,

    /// Oldest accepted age
    pub max_age: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_description_chars: 10,
            max_name_chars: 255,
            max_address_chars: 500,
            max_attribute_chars: 50,
            min_age: 1,
            max_age: 150,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.max_name_chars == 0 || self.max_address_chars == 0 || self.max_attribute_chars == 0
        {
            return Err(GatekeeperError::Config(
                "length limits must be greater than 0".to_string(),
            ));
        }
        if self.min_age > self.max_age {
            return Err(GatekeeperError::Config(format!(
                "min_age {} exceeds max_age {}",
                self.min_age, self.max_age
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GatekeeperError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| GatekeeperError::Config(format!("TOML parse failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
