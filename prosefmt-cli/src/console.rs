//! Prompting and user-facing reports
//!
//! Everything the user sees goes through [`Console`], which is generic over
//! its reader and writer so the prompt loops can run against in-memory
//! buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const ERROR_MARKER: &str = "🔴";
pub const WARNING_MARKER: &str = "⚠️";
pub const SUCCESS_MARKER: &str = "✅";

/// Remediation hint printed after a file problem
#[derive(Debug, Clone, Copy)]
pub struct Hint {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const INPUT_HINT: Hint = Hint {
    heading: "Please try a different file or check:",
    items: &[
        "The filename is correct",
        "You have proper permissions",
        "The file isn't corrupted",
    ],
};

pub const OUTPUT_HINT: Hint = Hint {
    heading: "Please try a different filename or check:",
    items: &[
        "You have write permissions in this location",
        "The path exists",
    ],
};

/// Prompt reader and report writer
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Show a prompt and read one trimmed answer
    ///
    /// Returns `None` once the reader is exhausted.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Blank line followed by a rule of `=` characters
    pub fn rule(&mut self, width: usize) -> io::Result<()> {
        writeln!(self.writer, "\n{}", "=".repeat(width))
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Write text without a trailing newline
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")
    }

    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{ERROR_MARKER} {message}")
    }

    pub fn warning(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{WARNING_MARKER} Error: {message}")
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "\n{SUCCESS_MARKER} {message}")
    }

    pub fn hint(&mut self, hint: &Hint) -> io::Result<()> {
        writeln!(self.writer, "\n{}", hint.heading)?;
        for item in hint.items {
            writeln!(self.writer, "- {item}")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
