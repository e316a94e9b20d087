//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};


/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated, human-readable output (default).
    Human,
    /// NDJSON output, one object per line.
    Json,
}

/// Where the enum rule comes from.
///
/// Inline `--value` flags take precedence over `--rule`. Supplying neither is
/// an error reported by the command, not by clap, so that `EVLOG_RULE` can
/// provide the file.
#[derive(Args, Clone, Debug, Default)]
pub struct RuleArgs {
    /// JSON rule file (`{"values": [...]}`), or `-` for stdin.
    #[arg(long, value_name = "FILE", env = "EVLOG_RULE")]
    pub rule: Option<PathOrStdin>,

    /// An allowed value (repeatable). Overrides `--rule`.
    #[arg(long = "value", value_name = "VALUE")]
    pub values: Vec<String>,
}

/// All top-level subcommands exposed by the `evlog` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Check values against an enum rule.
    ///
    /// Prints one outcome per value. Exits 0 when every value is accepted,
    /// 1 when any value is rejected, and 2 when the rule has no values.
    Check {
        /// Rule source.
        #[command(flatten)]
        rule: RuleArgs,
        /// Event id recorded in the validation context.
        #[arg(long, value_name = "ID", default_value = "")]
        event_id: String,
        /// Values to check. When omitted, one value is read per stdin line.
        #[arg(value_name = "DATA")]
        data: Vec<String>,
    },

    /// Print the regular expression equivalent to an enum rule.
    Pattern {
        /// Rule source.
        #[command(flatten)]
        rule: RuleArgs,
    },

    /// Print the evlog-core library version.
    Version,
}

/// Root CLI struct for the `evlog` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "evlog",
    version,
    about = "Event-log enum rule checker",
    long_about = "Checks event-log values against enum rules and prints the\n\
                  regular expression equivalent to a rule."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress the summary and all log output except errors
    /// (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log rule loading and per-value validation details to stderr
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes for rule files and stdin.
    ///
    /// Can also be set via the `EVLOG_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "EVLOG_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}

impl Cli {
    /// Returns the default `tracing` filter directive for the verbosity flags.
    ///
    /// `RUST_LOG` overrides this when set.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "evlog_core=trace,debug"
        } else {
            "warn"
        }
    }
}
