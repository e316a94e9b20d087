//! Implementation of `evlog pattern`.
//!
//! Prints the regular expression equivalent to an enum rule: every value
//! escaped as a regex literal, joined with `|`. An empty rule prints an
//! empty pattern and logs a warning.
use evlog_core::RegexAwareRule as _;

use crate::cli::{OutputFormat, RuleArgs};
use crate::cmd::load_rule;
use crate::error::CliError;
use crate::format::write_pattern;

/// Runs the `pattern` command, writing the pattern to stdout.
///
/// # Errors
///
/// Returns any error from [`load_rule`], or [`CliError::IoError`] if stdout
/// cannot be written.
pub fn run(args: &RuleArgs, format: OutputFormat, max_file_size: u64) -> Result<(), CliError> {
    let rule = load_rule(args, max_file_size)?;
    if rule.is_empty() {
        tracing::warn!("enum rule has no values; its pattern is empty");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_pattern(&mut out, &rule.as_regex(), format).map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}
