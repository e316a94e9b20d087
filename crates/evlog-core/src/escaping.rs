//! Value escaping for the event-log allow-listing conventions.
//!
//! Event ids and field values are normalized before they are compared with
//! the values registered in a rule. The current convention replaces
//! whitespace and control characters with `_` and drops quotes. Rules written
//! before the allowed symbols were changed may still carry values in which
//! `:`, `;` and `,` were also replaced; [`cleanup_for_legacy_rules`] maps an
//! escaped value onto that older form.
//!
//! Rules do not call these functions directly. They go through the
//! [`Escaper`] trait so that callers can plug in a different convention.
use std::borrow::Cow;

/// Replacement for characters that may not appear in an escaped value.
const REPLACEMENT: char = '_';

/// Symbols that the legacy convention replaced but the current one keeps.
const LEGACY_SYMBOLS: &[char] = &[':', ';', ','];

// ---------------------------------------------------------------------------
// Escaper
// ---------------------------------------------------------------------------

/// The pair of normalization transforms an enum rule applies to raw values.
///
/// Both methods must be deterministic and total: the same input always
/// produces the same output, and no input is rejected.
pub trait Escaper {
    /// Maps a raw value to its canonical form under the current convention.
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str>;

    /// Maps an already-escaped value to its legacy-convention equivalent.
    ///
    /// Returns `None` when the value has no distinct legacy form, in which
    /// case the legacy lookup is skipped.
    fn cleanup_legacy(&self, escaped: &str) -> Option<String>;
}

/// The event-log escaping convention used by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardEscaper;

impl Escaper for StandardEscaper {
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        escape_event_id_or_field_value(raw)
    }

    fn cleanup_legacy(&self, escaped: &str) -> Option<String> {
        cleanup_for_legacy_rules(escaped)
    }
}

/// An escaper that leaves values untouched and has no legacy form.
///
/// Useful for rules whose values are already canonical, and in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopEscaper;

impl Escaper for NoopEscaper {
    fn escape<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }

    fn cleanup_legacy(&self, _escaped: &str) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Escapes an event id or field value under the current convention.
///
/// Whitespace and control characters become `_`; `"` and `'` are removed.
/// Returns the input unchanged (borrowed) when no character needs escaping.
///
/// ```
/// # use evlog_core::escaping::escape_event_id_or_field_value;
/// assert_eq!(escape_event_id_or_field_value("open file"), "open_file");
/// assert_eq!(escape_event_id_or_field_value("\"quoted\""), "quoted");
/// ```
pub fn escape_event_id_or_field_value(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(needs_escaping) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if is_quote(ch) {
            continue;
        }
        if ch.is_whitespace() || ch.is_control() {
            escaped.push(REPLACEMENT);
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}

/// Converts an escaped value to the form used by rules that predate the
/// current set of allowed symbols.
///
/// Returns `None` if `escaped` contains no symbol the legacy convention
/// treated differently.
///
/// ```
/// # use evlog_core::escaping::cleanup_for_legacy_rules;
/// assert_eq!(cleanup_for_legacy_rules("a:b").as_deref(), Some("a_b"));
/// assert_eq!(cleanup_for_legacy_rules("a_b"), None);
/// ```
pub fn cleanup_for_legacy_rules(escaped: &str) -> Option<String> {
    if !escaped.contains(LEGACY_SYMBOLS) {
        return None;
    }
    Some(escaped.replace(LEGACY_SYMBOLS, "_"))
}

/// Escapes every regex metacharacter in `text` so that the result matches
/// `text` literally.
pub fn escape_regex_literal(text: &str) -> String {
    regex::escape(text)
}

fn is_quote(ch: char) -> bool {
    ch == '"' || ch == '\''
}

fn needs_escaping(ch: char) -> bool {
    is_quote(ch) || ch.is_whitespace() || ch.is_control()
}
