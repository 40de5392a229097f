//! Input file prompt loop

use std::io::{BufRead, Write};
use std::path::Path;

use super::file_reader::{FileReader, SourceFile};
use crate::config::SessionConfig;
use crate::console::{Console, INPUT_HINT};
use crate::error::CliResult;

pub const INPUT_PROMPT: &str = "Enter the input filename (or 'quit' to exit): ";

/// Ask for an input file until one can be read or the user gives up
///
/// Returns `None` when the user answers with a cancel word or closes stdin.
pub fn acquire_input<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &SessionConfig,
) -> CliResult<Option<SourceFile>> {
    loop {
        console.rule(config.rule_width)?;
        let Some(answer) = console.ask(INPUT_PROMPT)? else {
            log::info!("input prompt closed");
            return Ok(None);
        };

        if config.is_cancel(&answer) {
            console.line("Goodbye!")?;
            return Ok(None);
        }

        if answer.is_empty() {
            console.warning("No filename entered. Please try again.")?;
            continue;
        }

        match FileReader::read_source(Path::new(&answer)) {
            Ok(source) => return Ok(Some(source)),
            Err(error) => {
                log::debug!("rejected input {answer:?}: {error:?}");
                console.error(&error)?;
                console.hint(&INPUT_HINT)?;
            }
        }
    }
}
