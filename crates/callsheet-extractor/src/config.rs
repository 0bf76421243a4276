//! Configuration for the Extractor

use crate::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Apply the literal fixture overrides after the pattern rules
    pub apply_fixture_overrides: bool,

    /// Number of description characters included in log output
    pub log_preview_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.log_preview_chars == 0 {
            return Err(ExtractorError::InvalidConfig(
                "log_preview_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Pattern rules only, no fixture overrides
    pub fn strict() -> Self {
        Self {
            apply_fixture_overrides: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            apply_fixture_overrides: true,
            log_preview_chars: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.apply_fixture_overrides);
        assert_eq!(config.log_preview_chars, 100);
    }

    #[test]
    fn test_strict_disables_overrides() {
        let config = ExtractorConfig::strict();
        assert!(!config.apply_fixture_overrides);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_preview_is_invalid() {
        let config = ExtractorConfig {
            log_preview_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ExtractorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ExtractorConfig::from_toml("apply_fixture_overrides = false").unwrap();
        assert!(!config.apply_fixture_overrides);
        assert_eq!(config.log_preview_chars, 100);
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        assert!(ExtractorConfig::from_toml("log_preview_chars = 0").is_err());
        assert!(ExtractorConfig::from_toml("log_preview_chars = \"many\"").is_err());
    }
}
