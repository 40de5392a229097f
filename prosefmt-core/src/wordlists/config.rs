//! TOML schema for word list documents

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root of a word list document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordListConfig {
    pub metadata: Metadata,
    pub abbreviations: Abbreviations,
    pub proper_nouns: WordSet,
    pub emphasis: WordSet,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

/// Abbreviations keyed by category name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

/// A flat list of words
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordSet {
    #[serde(default)]
    pub words: Vec<String>,
}
