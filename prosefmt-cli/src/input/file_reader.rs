//! File reading utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Access, GateError};

/// A validated input file with its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Check and read a file as UTF-8 text
    ///
    /// Checks run in order: existence, regular file, readable, valid text.
    pub fn read_source(path: &Path) -> Result<SourceFile, GateError> {
        let metadata =
            fs::metadata(path).map_err(|e| GateError::classify(path, Access::Read, e))?;
        if !metadata.is_file() {
            return Err(GateError::NotAFile(path.to_path_buf()));
        }

        let content = Self::read_text(path)?;
        log::info!("read {} bytes from {}", content.len(), path.display());

        Ok(SourceFile {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String, GateError> {
        fs::read_to_string(path).map_err(|e| GateError::classify(path, Access::Read, e))
    }
}
