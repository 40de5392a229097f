//! Preview of a written output file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read up to `limit` lines from the start of a file, newlines kept
///
/// Files shorter than `limit` lines return what they have.
pub fn read_preview(path: &Path, limit: usize) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open for preview: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::with_capacity(limit);
    while lines.len() < limit {
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read preview of: {}", path.display()))?;
        if read == 0 {
            break;
        }
        lines.push(line);
    }

    Ok(lines)
}
