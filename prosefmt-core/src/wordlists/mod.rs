//! Fixed vocabulary used while reformatting sentences
//!
//! Three read-only sets of lowercase words:
//! - **abbreviations**: words that are not meant to end a sentence
//! - **proper nouns**: words that always get a leading capital
//! - **emphasis words**: words rendered upper case between `**` markers

pub mod config;
pub mod loader;

use std::collections::HashSet;

use crate::error::{CoreError, Result};
use config::WordListConfig;

pub use loader::builtin;

/// Immutable word lists consulted by the formatter
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    abbreviations: HashSet<String>,
    proper_nouns: HashSet<String>,
    emphasis: HashSet<String>,
}

impl WordLists {
    /// Build word lists from plain word collections
    ///
    /// Entries are lowercased. Empty entries and entries containing
    /// whitespace are rejected.
    pub fn new<A, P, E>(abbreviations: A, proper_nouns: P, emphasis: E) -> Result<Self>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            abbreviations: normalize("abbreviation", abbreviations)?,
            proper_nouns: normalize("proper noun", proper_nouns)?,
            emphasis: normalize("emphasis", emphasis)?,
        })
    }

    /// Parse a word list document
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: WordListConfig = toml::from_str(document)?;
        Self::from_config(&config)
    }

    /// Build word lists from an already parsed document
    pub fn from_config(config: &WordListConfig) -> Result<Self> {
        let abbreviations = config
            .abbreviations
            .categories
            .values()
            .flat_map(|words| words.iter());

        Self::new(
            abbreviations,
            &config.proper_nouns.words,
            &config.emphasis.words,
        )
    }

    /// Check if a word is a listed abbreviation
    ///
    /// Trailing periods and commas are ignored, so `Dr.` and `inc,` match.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        let stem = word.trim_end_matches(['.', ',']).to_lowercase();
        self.abbreviations.contains(&stem)
    }

    /// Check if a punctuation-free word is a listed proper noun
    pub fn is_proper_noun(&self, core: &str) -> bool {
        self.proper_nouns.contains(&core.to_lowercase())
    }

    /// Check if a punctuation-free word is a listed emphasis word
    pub fn is_emphasis(&self, core: &str) -> bool {
        self.emphasis.contains(&core.to_lowercase())
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn proper_noun_count(&self) -> usize {
        self.proper_nouns.len()
    }

    pub fn emphasis_count(&self) -> usize {
        self.emphasis.len()
    }
}

fn normalize<I>(list: &'static str, words: I) -> Result<HashSet<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.as_ref();
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                Err(CoreError::InvalidWord {
                    list,
                    word: word.to_string(),
                })
            } else {
                Ok(word.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordLists {
        WordLists::new(["Dr", "inc"], ["John", "smith"], ["URGENT"]).unwrap()
    }

    #[test]
    fn test_entries_are_lowercased() {
        let lists = sample();
        assert!(lists.is_proper_noun("john"));
        assert!(lists.is_proper_noun("JOHN"));
        assert!(lists.is_emphasis("urgent"));
        assert!(lists.is_abbreviation("dr"));
    }

    #[test]
    fn test_abbreviation_ignores_trailing_period_and_comma() {
        let lists = sample();
        assert!(lists.is_abbreviation("Dr."));
        assert!(lists.is_abbreviation("Inc.,"));
        assert!(!lists.is_abbreviation(".dr"));
        assert!(!lists.is_abbreviation("doctor"));
    }

    #[test]
    fn test_membership_is_exact_on_core() {
        let lists = sample();
        assert!(!lists.is_proper_noun("john."));
        assert!(!lists.is_emphasis("urgently"));
    }

    #[test]
    fn test_rejects_empty_entry() {
        let result = WordLists::new(["dr"], [""], ["urgent"]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidWord {
                list: "proper noun",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_entry_with_whitespace() {
        let result = WordLists::new(["dr"], ["john"], ["very urgent"]);
        match result {
            Err(CoreError::InvalidWord { list, word }) => {
                assert_eq!(list, "emphasis");
                assert_eq!(word, "very urgent");
            }
            other => panic!("expected InvalidWord, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_merges_abbreviation_categories() {
        let doc = r#"
            [metadata]
            name = "custom"

            [abbreviations]
            titles = ["dr", "mr"]
            places = ["nyc"]

            [proper_nouns]
            words = ["alice"]

            [emphasis]
            words = ["now"]
        "#;
        let lists = WordLists::from_toml_str(doc).unwrap();
        assert_eq!(lists.abbreviation_count(), 3);
        assert!(lists.is_abbreviation("NYC."));
        assert!(lists.is_proper_noun("Alice"));
        assert!(lists.is_emphasis("now"));
    }

    #[test]
    fn test_from_toml_rejects_bad_document() {
        let result = WordLists::from_toml_str("[metadata]\nname = 3");
        assert!(matches!(result, Err(CoreError::WordListParse(_))));
    }
}
