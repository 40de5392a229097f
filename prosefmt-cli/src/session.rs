//! One interactive formatting run
//!
//! Acquire input, acquire output, format, write, preview. The two prompt
//! loops recover from every file problem by asking again; a failure while
//! writing or previewing ends the run.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prosefmt_core::{SentenceFormatter, WordLists};

use crate::config::SessionConfig;
use crate::console::Console;
use crate::error::CliResult;
use crate::input::{acquire_input, SourceFile};
use crate::output::{acquire_output, read_preview, ParagraphWriter};

pub const BANNER: &str = "=== Sentence Formatter ===";

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The user cancelled before any output file was touched
    Cancelled,
    /// The output file was written and previewed
    Completed { output: PathBuf, sentences: usize },
    /// Formatting or writing failed; the output file may be partial
    Failed,
}

pub struct Session<'w, R, W> {
    console: Console<R, W>,
    config: SessionConfig,
    words: &'w WordLists,
}

impl<'w, R: BufRead, W: Write> Session<'w, R, W> {
    /// Bind a session to already loaded word lists
    ///
    /// Lists are resolved before the first prompt so a broken list document
    /// fails before any file is touched.
    pub fn new(console: Console<R, W>, config: SessionConfig, words: &'w WordLists) -> Self {
        Self {
            console,
            config,
            words,
        }
    }

    /// Run the session to completion
    ///
    /// Errors are returned only when the console itself cannot be used.
    pub fn run(&mut self) -> CliResult<RunOutcome> {
        self.console.line(BANNER)?;

        let Some(source) = acquire_input(&mut self.console, &self.config)? else {
            return Ok(RunOutcome::Cancelled);
        };
        let Some(output) = acquire_output(&mut self.console, &self.config, &source.path)? else {
            return Ok(RunOutcome::Cancelled);
        };

        let outcome = match self.process(&source, &output) {
            Ok(sentences) => RunOutcome::Completed { output, sentences },
            Err(error) => {
                log::error!("processing failed: {error:?}");
                self.report_failure(&error)?;
                RunOutcome::Failed
            }
        };

        self.console.flush()?;
        Ok(outcome)
    }

    /// Format, write and preview; returns the number of sentences written
    fn process(&mut self, source: &SourceFile, output: &Path) -> Result<usize> {
        let sentences = SentenceFormatter::new(self.words).format(&source.content);

        let file = File::create(output)
            .with_context(|| format!("Failed to open output file: {}", output.display()))?;
        let mut writer = ParagraphWriter::new(BufWriter::new(file));
        for sentence in &sentences {
            writer
                .write_sentence(sentence)
                .with_context(|| format!("Failed to write to: {}", output.display()))?;
        }
        let written = writer.written();
        writer
            .finish()
            .with_context(|| format!("Failed to flush: {}", output.display()))?;
        log::info!("wrote {written} sentences to {}", output.display());

        self.console.success(format_args!(
            "Success! Formatted content written to {}",
            output.display()
        ))?;
        self.console.line("\nPreview of formatted content:")?;

        let preview = read_preview(output, self.config.preview_lines)?;
        self.console.raw(&preview.concat())?;
        let more = if written > self.config.preview_lines {
            "..."
        } else {
            ""
        };
        self.console.line(more)?;

        Ok(written)
    }

    fn report_failure(&mut self, error: &anyhow::Error) -> io::Result<()> {
        self.console.line("")?;
        self.console.error(format_args!(
            "Processing Error: {} - {error:#}",
            error_kind(error)
        ))?;
        self.console
            .line("The output file may be incomplete or corrupted.")
    }

    /// Give back the console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

/// Short tag naming what kind of failure an error chain holds
fn error_kind(error: &anyhow::Error) -> String {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<io::Error>())
        .map_or_else(|| "Error".to_string(), |io_error| format!("{:?}", io_error.kind()))
}
