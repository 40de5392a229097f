//! Core error types

use thiserror::Error;

/// Errors raised while building word lists
#[derive(Debug, Error)]
pub enum CoreError {
    /// The word list document is not valid TOML or does not match the schema
    #[error("failed to parse word lists: {0}")]
    WordListParse(#[from] toml::de::Error),

    /// A list entry is empty or contains whitespace
    #[error("invalid entry {word:?} in {list} list")]
    InvalidWord { list: &'static str, word: String },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_word_display() {
        let error = CoreError::InvalidWord {
            list: "emphasis",
            word: "two words".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid entry \"two words\" in emphasis list"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_error = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let error: CoreError = parse_error.into();
        assert!(error.to_string().starts_with("failed to parse word lists:"));
    }
}
