//! Sentence boundary detection
//!
//! A boundary is a single whitespace character that follows `.`, `!` or `?`.
//! Two look-behind guards keep common dotted forms together:
//!
//! - **initials**: the four characters before the whitespace read
//!   word-char, `.`, word-char, terminator (`U.S.`, `e.g.`)
//! - **short titles**: the three characters before the whitespace read
//!   ASCII upper, ASCII lower, `.` (`Mr.`, `Dr.`)
//!
//! The whitespace that triggered a break is consumed. Pieces are returned
//! untrimmed and may be empty.

/// Characters that can end a sentence
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Check whether a character ends a sentence
pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// Whitespace, including the ASCII information separators U+001C..=U+001F
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Word characters in the sense of regular expression `\w`
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// The last four characters seen, most recent last
#[derive(Debug, Default, Clone, Copy)]
struct Window {
    chars: [Option<char>; 4],
}

impl Window {
    fn push(&mut self, ch: char) {
        self.chars.rotate_left(1);
        self.chars[3] = Some(ch);
    }

    /// Character `n` positions back, where 1 is the most recent
    fn back(&self, n: usize) -> Option<char> {
        self.chars[4 - n]
    }

    /// Whether a whitespace character arriving now would end a sentence
    fn is_boundary(&self) -> bool {
        if !self.back(1).is_some_and(is_terminator) {
            return false;
        }
        !self.is_initials() && !self.is_short_title()
    }

    fn is_initials(&self) -> bool {
        matches!(
            (self.back(4), self.back(3), self.back(2)),
            (Some(a), Some('.'), Some(b)) if is_word_char(a) && is_word_char(b)
        )
    }

    fn is_short_title(&self) -> bool {
        matches!(
            (self.back(3), self.back(2), self.back(1)),
            (Some(upper), Some(lower), Some('.'))
                if upper.is_ascii_uppercase() && lower.is_ascii_lowercase()
        )
    }
}

/// Iterator over the sentence pieces of a text
///
/// Always yields at least one piece; the empty text yields one empty piece.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    /// Start of the next piece, `None` once the tail has been yielded
    start: Option<usize>,
    /// Scan position
    cursor: usize,
    window: Window,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            start: Some(0),
            cursor: 0,
            window: Window::default(),
        }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;

        for (offset, ch) in self.text[self.cursor..].char_indices() {
            let pos = self.cursor + offset;
            if is_space(ch) && self.window.is_boundary() {
                let end = pos + ch.len_utf8();
                self.cursor = end;
                self.start = Some(end);
                self.window.push(ch);
                return Some(&self.text[start..pos]);
            }
            self.window.push(ch);
        }

        self.cursor = self.text.len();
        self.start = None;
        Some(&self.text[start..])
    }
}

/// Split text into untrimmed sentence pieces
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences::new(text)
}
