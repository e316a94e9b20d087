#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod error;
pub mod escaping;
pub mod validation;

pub use config::EnumRuleConfig;
pub use error::RuleConfigError;
pub use escaping::{
    Escaper, NoopEscaper, StandardEscaper, cleanup_for_legacy_rules,
    escape_event_id_or_field_value, escape_regex_literal,
};
pub use validation::enum_rule::EnumRule;
pub use validation::{EventContext, RegexAwareRule, ValidationResultType, ValueRule};

/// Returns the current version of the evlog-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
