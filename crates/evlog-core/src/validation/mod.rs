/// Outcome types and rule traits for event-log value validation.
///
/// This module defines [`ValidationResultType`], the closed set of outcomes a
/// rule can report, and [`EventContext`], the metadata a rule receives about
/// the event being validated.
///
/// It also defines the [`ValueRule`] and [`RegexAwareRule`] traits that every
/// rule kind implements. The only rule kind shipped here is
/// [`enum_rule::EnumRule`].
pub mod enum_rule;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The result of validating a single value against a rule.
///
/// This is not a boolean: [`ValidationResultType::IncorrectRule`] reports
/// that the rule itself cannot validate anything (for example an enum rule
/// with no values), which callers should surface as a configuration problem
/// rather than as rejected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationResultType {
    /// The value is allowed by the rule.
    Accepted,
    /// The value is not allowed by the rule.
    Rejected,
    /// The rule is malformed or empty and cannot validate.
    IncorrectRule,
}

impl ValidationResultType {
    /// Returns the stable message key for this outcome.
    ///
    /// These keys are what the event log records in place of a value that
    /// did not pass validation (e.g. `"validation.rejected"`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Accepted => "validation.accepted",
            Self::Rejected => "validation.rejected",
            Self::IncorrectRule => "validation.incorrect_rule",
        }
    }
}

impl fmt::Display for ValidationResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("ACCEPTED"),
            Self::Rejected => f.write_str("REJECTED"),
            Self::IncorrectRule => f.write_str("INCORRECT_RULE"),
        }
    }
}

/// Metadata about the event whose value is being validated.
///
/// Rules receive the context alongside the value. Simple rules such as
/// [`enum_rule::EnumRule`] ignore it; rules layered on top may look at the
/// event id or at sibling fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    /// The id of the event being validated.
    pub event_id: String,
    /// The event's data fields, keyed by field name.
    #[serde(default)]
    pub event_data: Map<String, Value>,
}

impl EventContext {
    /// Creates a context for `event_id` with no event data.
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            event_data: Map::new(),
        }
    }

    /// Adds a data field to the context, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.event_data.insert(name.into(), value.into());
        self
    }
}

/// A stateless rule that decides whether a single value is allowed.
///
/// Implementations must be pure: the same `data` and `context` always
/// produce the same outcome, and no call mutates the rule.
///
/// # Object safety
///
/// The trait is object-safe so heterogeneous rules can be held as
/// `Box<dyn ValueRule>`.
pub trait ValueRule {
    /// Validates `data` observed in the event described by `context`.
    fn validate(&self, data: &str, context: &EventContext) -> ValidationResultType;
}

/// A rule that can also be expressed as a regular expression.
///
/// The pattern accepts the same values the rule accepts once they have been
/// escaped, and is meant for composing with other pattern-based rules or for
/// display. It is not anchored.
pub trait RegexAwareRule: ValueRule {
    /// Returns the rule as an unanchored regular expression.
    fn as_regex(&self) -> String;
}
