//! Sentence splitting and word-level reformatting for plain text
//!
//! The crate turns a raw document into an ordered list of formatted
//! sentences. Every sentence starts with a capital letter, the rest of it is
//! lowercased, listed proper nouns are capitalized, listed emphasis words are
//! upper-cased between `**` markers, and every sentence ends in `.`, `!` or
//! `?`.
//!
//! # Example
//!
//! ```rust
//! use prosefmt_core::{SentenceFormatter, WordLists};
//!
//! let words = WordLists::new(["dr"], ["john"], ["urgent"]).unwrap();
//! let formatter = SentenceFormatter::new(&words);
//!
//! let sentences = formatter.format("john sent an URGENT note. call back");
//! assert_eq!(sentences, vec!["John sent an **URGENT** note.", "Call back."]);
//! ```

pub mod classify;
pub mod error;
pub mod formatter;
pub mod splitter;
pub mod wordlists;

pub use classify::{classify, render_token, TokenClass};
pub use error::{CoreError, Result};
pub use formatter::{format_text, SentenceFormatter};
pub use splitter::{split_sentences, Sentences};
pub use wordlists::WordLists;
