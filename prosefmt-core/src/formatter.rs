//! Sentence formatting pipeline
//!
//! Each sentence piece goes through:
//! 1. trim, dropping blank pieces
//! 2. first character upper case, everything else lower case
//! 3. per-token classification against the word lists
//! 4. tokens rejoined with single spaces
//! 5. a `.` appended when the sentence lacks terminal punctuation

use crate::classify::{classify, render_token};
use crate::error::Result;
use crate::splitter::{is_space, is_terminator, split_sentences};
use crate::wordlists::{self, WordLists};

/// Turns raw text into formatted sentences
#[derive(Debug, Clone, Copy)]
pub struct SentenceFormatter<'w> {
    words: &'w WordLists,
}

impl<'w> SentenceFormatter<'w> {
    pub fn new(words: &'w WordLists) -> Self {
        Self { words }
    }

    /// Format a whole document, in order, skipping blank sentences
    pub fn format(&self, text: &str) -> Vec<String> {
        let sentences: Vec<String> = split_sentences(text)
            .filter_map(|piece| self.format_sentence(piece))
            .collect();

        log::debug!(
            "formatted {} sentences from {} bytes",
            sentences.len(),
            text.len()
        );
        sentences
    }

    /// Format a single sentence piece, or `None` if it is blank
    pub fn format_sentence(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim_matches(is_space);
        if trimmed.is_empty() {
            return None;
        }

        self.trace_abbreviation_break(trimmed);

        let recased = recase(trimmed);
        let mut sentence = recased
            .split(is_space)
            .filter(|token| !token.is_empty())
            .map(|token| render_token(token, classify(self.words, token)))
            .collect::<Vec<_>>()
            .join(" ");

        if !sentence.ends_with(is_terminator) {
            sentence.push('.');
        }

        Some(sentence)
    }

    /// Abbreviations are not consulted when splitting; record when a break
    /// lands right after one.
    fn trace_abbreviation_break(&self, sentence: &str) {
        if let Some(last) = sentence.split(is_space).next_back() {
            if last.ends_with('.') && self.words.is_abbreviation(last) {
                log::debug!("sentence break after listed abbreviation {last:?}");
            }
        }
    }
}

/// Upper-case the first character of a sentence and lowercase the rest
fn recase(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(sentence.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Format text with the built-in word lists
pub fn format_text(text: &str) -> Result<Vec<String>> {
    let words = wordlists::builtin()?;
    Ok(SentenceFormatter::new(words).format(text))
}
