//! Embedded word lists
//!
//! The default lists ship inside the binary and are parsed once per process.

use std::sync::OnceLock;

use super::WordLists;
use crate::error::Result;

static BUILTIN: OnceLock<WordLists> = OnceLock::new();

const BUILTIN_DOCUMENT: &str = include_str!("../../configs/wordlists.toml");

/// Get the built-in word lists, parsing them on first access
pub fn builtin() -> Result<&'static WordLists> {
    if let Some(lists) = BUILTIN.get() {
        return Ok(lists);
    }

    let parsed = WordLists::from_toml_str(BUILTIN_DOCUMENT)?;
    log::debug!(
        "loaded built-in word lists: {} abbreviations, {} proper nouns, {} emphasis words",
        parsed.abbreviation_count(),
        parsed.proper_noun_count(),
        parsed.emphasis_count()
    );

    Ok(BUILTIN.get_or_init(|| parsed))
}
