//! Paragraph output writer

use anyhow::Result;
use std::io::Write;

/// Writes one sentence per paragraph, paragraphs separated by a blank line
pub struct ParagraphWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> ParagraphWriter<W> {
    /// Create a new paragraph writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a single sentence followed by a blank line
    pub fn write_sentence(&mut self, sentence: &str) -> Result<()> {
        write!(self.writer, "{sentence}\n\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of sentences written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and give back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_layout() {
        let mut writer = ParagraphWriter::new(Vec::new());
        writer.write_sentence("First one.").unwrap();
        writer.write_sentence("Second one!").unwrap();
        assert_eq!(writer.written(), 2);

        let bytes = writer.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "First one.\n\nSecond one!\n\n");
    }

    #[test]
    fn test_nothing_written() {
        let writer = ParagraphWriter::new(Vec::new());
        assert_eq!(writer.written(), 0);
        assert!(writer.finish().unwrap().is_empty());
    }
}
