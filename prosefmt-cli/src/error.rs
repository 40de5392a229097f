//! Error handling for the CLI application

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Kind of access that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write to"),
        }
    }
}

/// Failures reported while acquiring the input and output files
///
/// All of these are recoverable: the user is told and asked again.
#[derive(Debug, Error)]
pub enum GateError {
    /// The input path does not exist
    #[error("File Error: '{}' doesn't exist", .0.display())]
    MissingFile(PathBuf),

    /// The input path exists but is a directory or other non-file
    #[error("Error: '{}' is a directory", .0.display())]
    NotAFile(PathBuf),

    /// The process lacks permission for the requested access
    #[error("Permission Error: No permission to {access} '{}'", .path.display())]
    PermissionDenied { path: PathBuf, access: Access },

    /// The input is not valid UTF-8 text
    #[error("Encoding Error: Cannot read '{}' as text", .0.display())]
    Encoding(PathBuf),

    /// Any other I/O failure
    #[error("I/O Error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A failure outside the usual I/O family
    #[error("Unexpected Error: {kind} - {message}")]
    Unexpected { kind: String, message: String },
}

impl GateError {
    /// Map an I/O error raised while accessing `path` onto the taxonomy
    pub fn classify(path: &Path, access: Access, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound if access == Access::Read => GateError::MissingFile(path),
            io::ErrorKind::PermissionDenied => GateError::PermissionDenied { path, access },
            io::ErrorKind::InvalidData if access == Access::Read => GateError::Encoding(path),
            kind @ (io::ErrorKind::Unsupported | io::ErrorKind::OutOfMemory) => {
                GateError::Unexpected {
                    kind: format!("{kind:?}"),
                    message: error.to_string(),
                }
            }
            _ => {
                let context = match access {
                    Access::Read => format!("Cannot read '{}'", path.display()),
                    Access::Write => "Cannot write to file".to_string(),
                };
                GateError::Io {
                    context,
                    source: error,
                }
            }
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("notes.txt")
    }

    #[test]
    fn test_missing_file_display() {
        let error = GateError::MissingFile(PathBuf::from("test.txt"));
        assert_eq!(error.to_string(), "File Error: 'test.txt' doesn't exist");
    }

    #[test]
    fn test_not_a_file_display() {
        let error = GateError::NotAFile(PathBuf::from("docs"));
        assert_eq!(error.to_string(), "Error: 'docs' is a directory");
    }

    #[test]
    fn test_permission_denied_display() {
        let read = GateError::PermissionDenied {
            path: PathBuf::from("secret.txt"),
            access: Access::Read,
        };
        assert_eq!(
            read.to_string(),
            "Permission Error: No permission to read 'secret.txt'"
        );

        let write = GateError::PermissionDenied {
            path: PathBuf::from("/root.txt"),
            access: Access::Write,
        };
        assert_eq!(
            write.to_string(),
            "Permission Error: No permission to write to '/root.txt'"
        );
    }

    #[test]
    fn test_classify_not_found() {
        let error = GateError::classify(path(), Access::Read, io::ErrorKind::NotFound.into());
        assert!(matches!(error, GateError::MissingFile(_)));
    }

    #[test]
    fn test_classify_not_found_on_write_is_io() {
        let error = GateError::classify(path(), Access::Write, io::ErrorKind::NotFound.into());
        match error {
            GateError::Io { context, .. } => assert_eq!(context, "Cannot write to file"),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_permission_denied() {
        let error = GateError::classify(
            path(),
            Access::Read,
            io::ErrorKind::PermissionDenied.into(),
        );
        assert!(matches!(
            error,
            GateError::PermissionDenied {
                access: Access::Read,
                ..
            }
        ));
    }

    #[test]
    fn test_classify_invalid_data() {
        let error = GateError::classify(path(), Access::Read, io::ErrorKind::InvalidData.into());
        assert_eq!(
            error.to_string(),
            "Encoding Error: Cannot read 'notes.txt' as text"
        );
    }

    #[test]
    fn test_classify_unsupported_is_unexpected() {
        let error = GateError::classify(
            path(),
            Access::Write,
            io::Error::new(io::ErrorKind::Unsupported, "no such operation"),
        );
        assert_eq!(
            error.to_string(),
            "Unexpected Error: Unsupported - no such operation"
        );
    }

    #[test]
    fn test_classify_other_is_io() {
        let error = GateError::classify(
            path(),
            Access::Read,
            io::Error::new(io::ErrorKind::Interrupted, "signal"),
        );
        assert_eq!(error.to_string(), "I/O Error: Cannot read 'notes.txt': signal");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
