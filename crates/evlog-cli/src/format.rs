/// Output formatting: human-readable and JSON (NDJSON) modes.
///
/// - **Human mode** (default): one `OUTCOME<TAB>value` line per checked
///   value on stdout, and a summary line on stderr.
/// - **JSON mode**: one JSON object per line on stdout, with the summary as
///   the final object on stderr.
use std::io::Write;

use evlog_core::ValidationResultType;
use serde_json::json;

use crate::cli::OutputFormat;

/// Counts of outcomes produced by a `check` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Values accepted by the rule.
    pub accepted: usize,
    /// Values rejected by the rule.
    pub rejected: usize,
    /// Values the rule could not validate.
    pub incorrect_rule: usize,
}

impl Summary {
    /// Adds one outcome to the counts.
    pub fn record(&mut self, outcome: ValidationResultType) {
        match outcome {
            ValidationResultType::Accepted => self.accepted += 1,
            ValidationResultType::Rejected => self.rejected += 1,
            ValidationResultType::IncorrectRule => self.incorrect_rule += 1,
        }
    }
}

/// Writes the outcome for a single checked value.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_outcome<W: Write>(
    writer: &mut W,
    value: &str,
    outcome: ValidationResultType,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{outcome}\t{value}"),
        OutputFormat::Json => {
            let line = json!({ "value": value, "result": outcome });
            writeln!(writer, "{line}")
        }
    }
}

/// Writes the summary of a `check` run.
///
/// Format in human mode: `2 accepted, 1 rejected`, with
/// `, N incorrect rule` appended when the rule could not validate.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &Summary,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            write!(
                writer,
                "{} accepted, {} rejected",
                summary.accepted, summary.rejected
            )?;
            if summary.incorrect_rule > 0 {
                write!(writer, ", {} incorrect rule", summary.incorrect_rule)?;
            }
            writeln!(writer)
        }
        OutputFormat::Json => {
            let line = json!({
                "summary": {
                    "accepted": summary.accepted,
                    "rejected": summary.rejected,
                    "incorrect_rule": summary.incorrect_rule,
                }
            });
            writeln!(writer, "{line}")
        }
    }
}

/// Writes the regular expression for a rule.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_pattern<W: Write>(
    writer: &mut W,
    pattern: &str,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(writer, "{pattern}"),
        OutputFormat::Json => writeln!(writer, "{}", json!({ "pattern": pattern })),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn human_outcome_is_tab_separated() {
        let out = capture(|w| {
            write_outcome(w, "red", ValidationResultType::Accepted, OutputFormat::Human)
        });
        assert_eq!(out, "ACCEPTED\tred\n");
    }

    #[test]
    fn json_outcome_is_one_object_per_line() {
        let out = capture(|w| {
            write_outcome(w, "RED", ValidationResultType::Rejected, OutputFormat::Json)
        });
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json");
        assert_eq!(v["value"], "RED");
        assert_eq!(v["result"], "REJECTED");
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = Summary::default();
        summary.record(ValidationResultType::Accepted);
        summary.record(ValidationResultType::Accepted);
        summary.record(ValidationResultType::Rejected);
        assert_eq!(
            summary,
            Summary {
                accepted: 2,
                rejected: 1,
                incorrect_rule: 0,
            }
        );
    }

    #[test]
    fn human_summary_omits_zero_incorrect_rule() {
        let summary = Summary {
            accepted: 2,
            rejected: 1,
            incorrect_rule: 0,
        };
        let out = capture(|w| write_summary(w, &summary, OutputFormat::Human));
        assert_eq!(out, "2 accepted, 1 rejected\n");
    }

    #[test]
    fn human_summary_mentions_incorrect_rule() {
        let summary = Summary {
            accepted: 0,
            rejected: 0,
            incorrect_rule: 3,
        };
        let out = capture(|w| write_summary(w, &summary, OutputFormat::Human));
        assert_eq!(out, "0 accepted, 0 rejected, 3 incorrect rule\n");
    }

    #[test]
    fn json_summary_has_all_counts() {
        let summary = Summary {
            accepted: 1,
            rejected: 2,
            incorrect_rule: 0,
        };
        let out = capture(|w| write_summary(w, &summary, OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).expect("json");
        assert_eq!(v["summary"]["accepted"], 1);
        assert_eq!(v["summary"]["rejected"], 2);
        assert_eq!(v["summary"]["incorrect_rule"], 0);
    }

    #[test]
    fn pattern_output() {
        let human = capture(|w| write_pattern(w, r"a\.b|c", OutputFormat::Human));
        assert_eq!(human, "a\\.b|c\n");
        let json = capture(|w| write_pattern(w, r"a\.b|c", OutputFormat::Json));
        let v: serde_json::Value = serde_json::from_str(json.trim_end()).expect("json");
        assert_eq!(v["pattern"], r"a\.b|c");
    }
}
