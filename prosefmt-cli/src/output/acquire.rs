//! Output file prompt loop

use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::console::{Console, OUTPUT_HINT};
use crate::error::{Access, CliResult, GateError};

pub const OUTPUT_PROMPT: &str = "Enter the output filename : ";

/// Ask for a writable output path different from `input`
///
/// Every accepted path has been created or truncated to zero bytes. Returns
/// `None` only when stdin is closed.
pub fn acquire_output<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
    input: &Path,
) -> CliResult<Option<PathBuf>> {
    loop {
        console.rule(config.rule_width)?;
        let Some(answer) = console.ask(OUTPUT_PROMPT)? else {
            log::info!("output prompt closed");
            return Ok(None);
        };

        if answer.is_empty() {
            console.warning("No filename entered. Please try again.")?;
            continue;
        }

        let candidate = PathBuf::from(&answer);
        if is_same_file(input, &candidate) {
            console.warning("Output file cannot be the same as input file.")?;
            continue;
        }

        match probe_writable(&candidate) {
            Ok(()) => return Ok(Some(candidate)),
            Err(error) => {
                log::debug!("rejected output {answer:?}: {error:?}");
                console.error(&error)?;
                console.hint(&OUTPUT_HINT)?;
            }
        }
    }
}

/// Whether two paths name the same file, by spelling or after resolution
pub fn is_same_file(input: &Path, candidate: &Path) -> bool {
    if input == candidate {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(candidate)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Create or truncate `path` to confirm it can be written
pub fn probe_writable(path: &Path) -> Result<(), GateError> {
    File::create(path)
        .map(drop)
        .map_err(|e| GateError::classify(path, Access::Write, e))
}
