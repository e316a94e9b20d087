/// Command module for the `evlog` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the parsed arguments and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
pub mod check;
pub mod pattern;

use evlog_core::EnumRule;

use crate::cli::RuleArgs;
use crate::error::CliError;
use crate::io::{read_input, source_label};

/// Builds the enum rule described by `args`.
///
/// Inline `--value` flags win over `--rule`; the rule file is only read when
/// no inline value was given.
///
/// # Errors
///
/// - [`CliError::MissingRule`]: neither source was given.
/// - [`CliError::InvalidRule`]: the rule file is not a valid configuration.
/// - Any I/O error from [`read_input`].
pub fn load_rule(args: &RuleArgs, max_file_size: u64) -> Result<EnumRule, CliError> {
    if !args.values.is_empty() {
        tracing::debug!(count = args.values.len(), "using inline enum values");
        return Ok(EnumRule::new(args.values.iter().map(String::as_str)));
    }

    let Some(source) = &args.rule else {
        return Err(CliError::MissingRule);
    };

    let content = read_input(source, max_file_size)?;
    let rule = EnumRule::from_json(&content).map_err(|error| CliError::InvalidRule {
        source: source_label(source),
        error,
    })?;
    tracing::debug!(source = %source_label(source), values = rule.len(), "loaded enum rule");
    Ok(rule)
}
