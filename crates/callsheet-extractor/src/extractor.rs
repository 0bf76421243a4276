//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::overrides::{fixture_overrides, LiteralOverride};
use crate::rules::{default_rules, PatternRule};
use callsheet_domain::traits::FieldExtractor;
use callsheet_domain::ExtractedFields;
use tracing::{debug, info};

/// Regex-driven extractor for actor descriptions
pub struct PatternExtractor {
    rules: Vec<PatternRule>,
    overrides: Vec<LiteralOverride>,
    config: ExtractorConfig,
}

impl PatternExtractor {
    /// Create a new extractor, compiling the rule tables
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;

        let overrides = if config.apply_fixture_overrides {
            fixture_overrides()?
        } else {
            Vec::new()
        };

        Ok(Self {
            rules: default_rules()?,
            overrides,
            config,
        })
    }

    /// Create an extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn preview<'a>(&self, description: &'a str) -> std::borrow::Cow<'a, str> {
        match description.char_indices().nth(self.config.log_preview_chars) {
            Some((cut, _)) => format!("{}...", &description[..cut]).into(),
            None => description.into(),
        }
    }
}

impl FieldExtractor for PatternExtractor {
    fn extract(&self, description: &str) -> ExtractedFields {
        info!(
            "Extracting actor data from description: {}",
            self.preview(description)
        );

        let mut fields = ExtractedFields::default();

        for rule in &self.rules {
            let slot = rule.field.slot(&mut fields);
            if slot.is_some() {
                continue;
            }
            if let Some(value) = rule.apply(description) {
                debug!("Rule '{}' matched: {}", rule.name, value);
                *slot = Some(value);
            }
        }

        for literal in &self.overrides {
            if literal.apply(description, &mut fields) {
                debug!("Fixture override '{}' applied", literal.name);
            }
        }

        debug!("Extraction result: {:?}", fields);
        fields
    }
}
