/// Enum-membership rule: a value is valid if it is one of a fixed set.
///
/// The raw value is escaped with the current convention and looked up in the
/// allowed set. If that fails, the escaped value gets a second chance in its
/// legacy form, so rules registered before the allowed symbols changed keep
/// accepting the values they were written for.
///
/// An [`EnumRule`] with no values validates every input as
/// [`ValidationResultType::IncorrectRule`].
use std::collections::BTreeSet;
use std::fmt;

use crate::config::EnumRuleConfig;
use crate::escaping::{Escaper, StandardEscaper, escape_regex_literal};
use crate::validation::{EventContext, RegexAwareRule, ValidationResultType, ValueRule};


/// A rule accepting values from a fixed, immutable set.
///
/// The set is deduplicated and frozen at construction. It is kept in a
/// [`BTreeSet`] so that [`as_regex`][RegexAwareRule::as_regex] lists the
/// alternatives in the same (lexicographic) order on every run.
///
/// `EnumRule` is `Send + Sync` whenever its escaper is, and every operation
/// takes `&self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRule<E = StandardEscaper> {
    values: BTreeSet<String>,
    escaper: E,
}

impl EnumRule {
    /// Creates a rule over `values` using the [`StandardEscaper`].
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_escaper(values, StandardEscaper)
    }

    /// Creates a rule from an optional collection; `None` yields an empty rule.
    pub fn from_optional<I, S>(values: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match values {
            Some(values) => Self::new(values),
            None => Self::empty(),
        }
    }

    /// Creates a rule with no values.
    pub fn empty() -> Self {
        Self::with_escaper(std::iter::empty::<String>(), StandardEscaper)
    }
}

impl<E: Escaper> EnumRule<E> {
    /// Creates a rule over `values` that normalizes input with `escaper`.
    pub fn with_escaper<I, S>(values: I, escaper: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            tracing::debug!("enum rule has no values; it will report every value as an incorrect rule");
        }
        Self { values, escaper }
    }

    /// Returns `true` if `value` is one of the allowed values, compared as is.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Returns the number of distinct allowed values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the rule has no allowed values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the allowed values in lexicographic order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Returns the configuration this rule can be rebuilt from.
    pub fn to_config(&self) -> EnumRuleConfig {
        EnumRuleConfig {
            values: Some(self.values.iter().cloned().collect()),
        }
    }
}

impl<E: Escaper> ValueRule for EnumRule<E> {
    fn validate(&self, data: &str, _context: &EventContext) -> ValidationResultType {
        if self.values.is_empty() {
            return ValidationResultType::IncorrectRule;
        }

        let escaped = self.escaper.escape(data);
        if self.values.contains(escaped.as_ref()) {
            return ValidationResultType::Accepted;
        }

        // Rules created before the allowed symbols changed store legacy forms.
        let legacy_match = self
            .escaper
            .cleanup_legacy(&escaped)
            .is_some_and(|legacy| self.values.contains(&legacy));
        if legacy_match {
            tracing::trace!(value = %escaped, "accepted by legacy enum value");
            ValidationResultType::Accepted
        } else {
            ValidationResultType::Rejected
        }
    }
}

impl<E: Escaper> RegexAwareRule for EnumRule<E> {
    fn as_regex(&self) -> String {
        self.values
            .iter()
            .map(|v| escape_regex_literal(v))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl<E: Escaper> fmt::Display for EnumRule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumRule: values={}", self.as_regex())
    }
}

impl<S: Into<String>> FromIterator<S> for EnumRule {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
