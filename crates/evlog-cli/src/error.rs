/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `evlog` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: the tool could not obtain a usable rule or input
///   (unreadable file, malformed rule, empty rule).
/// - Exit code **1**: the check ran to completion and at least one value
///   was rejected.
use std::fmt;
use std::path::PathBuf;

use evlog_core::RuleConfigError;

/// All error conditions that the `evlog` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; unknown for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error not covered by the more specific variants above.
    IoError {
        /// `"-"` for stdin, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The rule file is not a valid rule configuration.
    InvalidRule {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The underlying configuration error.
        error: RuleConfigError,
    },

    /// Neither `--rule` nor `--value` was given.
    MissingRule,

    /// Both the rule and the values to check were to be read from stdin.
    StdinConflict,

    /// The rule has no values and cannot validate anything.
    IncorrectRule,

    // --- Exit code 1: logical failures ---
    /// One or more values were rejected by the rule.
    ///
    /// The outcomes have already been printed.
    ValuesRejected {
        /// How many values were rejected.
        count: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::IoError { .. }
            | Self::InvalidRule { .. }
            | Self::MissingRule
            | Self::StdinConflict
            | Self::IncorrectRule => 2,

            Self::ValuesRejected { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::InvalidRule { source, error } => {
                format!("error: {source}: {error}")
            }
            Self::MissingRule => {
                "error: no rule given; pass --rule FILE or at least one --value".to_owned()
            }
            Self::StdinConflict => {
                "error: the rule is read from stdin, so values must be passed as arguments"
                    .to_owned()
            }
            Self::IncorrectRule => {
                "error: incorrect rule: the enum rule has no values".to_owned()
            }
            Self::ValuesRejected { count: 1 } => "error: 1 value was rejected".to_owned(),
            Self::ValuesRejected { count } => format!("error: {count} values were rejected"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}
