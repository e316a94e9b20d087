//! Errors raised while loading rule configuration.
//!
//! Validation itself never fails; an unusable rule is reported through
//! [`crate::ValidationResultType::IncorrectRule`]. These errors only cover
//! turning configuration text into a rule.
use thiserror::Error;

/// A rule configuration document could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleConfigError {
    /// The document is not valid JSON, or does not have the expected shape.
    #[error("invalid rule configuration at line {line}, column {column}: {detail}")]
    Json {
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
        /// The underlying parser message.
        detail: String,
    },
}

impl From<serde_json::Error> for RuleConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}
