//! Serde-facing configuration for enum rules.
//!
//! A rule is instantiated once from configuration data. The accepted JSON
//! shape is a single object carrying the allowed values:
//!
//! ```json
//! { "values": ["red", "green", "blue"] }
//! ```
//!
//! The key `enum` is accepted as an alias for `values`. A missing or `null`
//! list produces an empty rule, which validates every value as
//! [`crate::ValidationResultType::IncorrectRule`].
use serde::{Deserialize, Serialize};

use crate::error::RuleConfigError;
use crate::validation::enum_rule::EnumRule;

/// Configuration data for an [`EnumRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRuleConfig {
    /// The allowed values. Order and duplicates are irrelevant.
    #[serde(default, alias = "enum", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl EnumRuleConfig {
    /// Parses a configuration document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigError::Json`] if `json` is not a JSON object of the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, RuleConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<EnumRuleConfig> for EnumRule {
    fn from(config: EnumRuleConfig) -> Self {
        EnumRule::from_optional(config.values)
    }
}

impl EnumRule {
    /// Builds a rule from a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`RuleConfigError::Json`] if the document cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, RuleConfigError> {
        EnumRuleConfig::from_json(json).map(Self::from)
    }
}
