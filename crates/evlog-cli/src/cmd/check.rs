//! Implementation of `evlog check`.
//!
//! Loads an enum rule and validates each value against it, printing one
//! outcome per value to stdout and a summary to stderr.
//!
//! Exit codes:
//! - 0 = every value accepted
//! - 1 = at least one value rejected
//! - 2 = the rule has no values, or the rule or input could not be read
use std::io::Write;

use evlog_core::{EventContext, ValueRule};

use crate::cli::{OutputFormat, PathOrStdin, RuleArgs};
use crate::cmd::load_rule;
use crate::error::CliError;
use crate::format::{Summary, write_outcome, write_summary};
use crate::io::read_input;

/// Options for a `check` run that come from the command line.
#[derive(Debug, Clone)]
pub struct CheckOptions<'a> {
    /// Event id placed in the validation context.
    pub event_id: &'a str,
    /// Output format for outcomes and summary.
    pub format: OutputFormat,
    /// Suppress the summary line.
    pub quiet: bool,
    /// Size limit for rule files and stdin.
    pub max_file_size: u64,
}

/// Runs the `check` command.
///
/// Values come from `data`, or from stdin (one per line) when `data` is
/// empty.
///
/// # Errors
///
/// - [`CliError::StdinConflict`]: rule and values would both come from stdin.
/// - [`CliError::IncorrectRule`]: the rule has no values.
/// - [`CliError::ValuesRejected`]: at least one value was rejected.
/// - Any error from [`load_rule`] or from reading stdin.
pub fn run(args: &RuleArgs, data: &[String], options: &CheckOptions<'_>) -> Result<(), CliError> {
    let values_from_stdin = data.is_empty();
    if values_from_stdin && args.values.is_empty() && args.rule == Some(PathOrStdin::Stdin) {
        return Err(CliError::StdinConflict);
    }

    let rule = load_rule(args, options.max_file_size)?;

    let values: Vec<String> = if values_from_stdin {
        read_input(&PathOrStdin::Stdin, options.max_file_size)?
            .lines()
            .map(ToOwned::to_owned)
            .collect()
    } else {
        data.to_vec()
    };

    let context = EventContext::new(options.event_id);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = check_values(&rule, &values, &context, &mut out, options.format)
        .map_err(|e| io_error("stdout", &e))?;

    if !options.quiet {
        let stderr = std::io::stderr();
        let mut err_out = stderr.lock();
        write_summary(&mut err_out, &summary, options.format)
            .map_err(|e| io_error("stderr", &e))?;
    }

    exit_status(&summary, rule.is_empty())
}

/// Validates every value with `rule` and writes each outcome to `writer`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn check_values<R, W>(
    rule: &R,
    values: &[String],
    context: &EventContext,
    writer: &mut W,
    format: OutputFormat,
) -> std::io::Result<Summary>
where
    R: ValueRule + ?Sized,
    W: Write,
{
    let mut summary = Summary::default();
    for value in values {
        let outcome = rule.validate(value, context);
        summary.record(outcome);
        write_outcome(writer, value, outcome, format)?;
    }
    Ok(summary)
}

/// Maps the outcome counts of a run to the command result.
///
/// An empty rule fails even when there were no values to check.
fn exit_status(summary: &Summary, rule_is_empty: bool) -> Result<(), CliError> {
    if rule_is_empty || summary.incorrect_rule > 0 {
        tracing::warn!(
            values = summary.incorrect_rule,
            "enum rule has no values and cannot validate; check the rule configuration"
        );
        Err(CliError::IncorrectRule)
    } else if summary.rejected > 0 {
        Err(CliError::ValuesRejected {
            count: summary.rejected,
        })
    } else {
        Ok(())
    }
}

fn io_error(target: &str, e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: target.to_owned(),
        detail: e.to_string(),
    }
}
