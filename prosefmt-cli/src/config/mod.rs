//! Session constants

/// Fixed settings of an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Answers to the input prompt that end the session (ASCII case-insensitive)
    pub cancel_words: Vec<String>,

    /// Number of output lines shown after a successful run
    pub preview_lines: usize,

    /// Width of the `=` rule printed before each prompt
    pub rule_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cancel_words: vec!["quit".to_string(), "exit".to_string(), "q".to_string()],
            preview_lines: 5,
            rule_width: 50,
        }
    }
}

impl SessionConfig {
    /// Check whether an answer asks to end the session
    pub fn is_cancel(&self, answer: &str) -> bool {
        self.cancel_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(answer))
    }
}
