/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// All input I/O in the `evlog` binary goes through [`read_input`];
/// `evlog-core` never touches the filesystem. Every failure is mapped to a
/// [`CliError`] with exit code 2.
use std::io::Read as _;
use std::path::Path;

use crate::cli::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// Disk files are checked against `max_size` via `std::fs::metadata` before
/// any bytes are read. Stdin is read through `Read::take` so the allocation
/// is bounded.
///
/// # Errors
///
/// Returns [`CliError`] if the source cannot be read, exceeds `max_size`, or
/// is not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Returns the label used for `source` in error messages.
pub fn source_label(source: &PathOrStdin) -> String {
    match source {
        PathOrStdin::Path(path) => path.display().to_string(),
        PathOrStdin::Stdin => "-".to_owned(),
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads stdin up to `max_size` bytes, then probes one more byte to tell
/// "exactly at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    let mut buf: Vec<u8> = Vec::new();

    let stdin_error = |e: std::io::Error| CliError::IoError {
        source: "-".to_owned(),
        detail: e.to_string(),
    };

    handle
        .by_ref()
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(stdin_error)?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        if handle.read(&mut probe).map_err(stdin_error)? > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use std::io::Write as _;

    use super::*;

    #[test]
    fn reads_small_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{"values": ["a"]}"#).expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        let content = read_input(&source, 1024).expect("read");
        assert_eq!(content, r#"{"values": ["a"]}"#);
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = PathOrStdin::Path("/definitely/not/here/rule.json".into());
        match read_input(&source, 1024) {
            Err(CliError::FileNotFound { path }) => {
                assert!(path.ends_with("rule.json"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[b'x'; 64]).expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        match read_input(&source, 16) {
            Err(CliError::FileTooLarge {
                limit: 16,
                actual: Some(64),
                ..
            }) => {}
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_reports_offset() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(&[b'o', b'k', 0xff, b'!']).expect("write");
        let source = PathOrStdin::Path(file.path().to_path_buf());
        match read_input(&source, 1024) {
            Err(CliError::InvalidUtf8 { byte_offset, .. }) => assert_eq!(byte_offset, 2),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn labels() {
        assert_eq!(source_label(&PathOrStdin::Stdin), "-");
        assert_eq!(
            source_label(&PathOrStdin::Path("rules/colors.json".into())),
            "rules/colors.json"
        );
    }
}
