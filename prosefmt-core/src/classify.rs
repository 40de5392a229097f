//! Word classification and rendering
//!
//! Tokens are matched on their *core*: the token with leading and trailing
//! non-alphanumeric characters peeled off. The peeled punctuation is put back
//! around the rendered core unchanged.

use std::borrow::Cow;

use crate::wordlists::WordLists;

/// Marker placed on both sides of an emphasized word
pub const EMPHASIS_MARKER: &str = "**";

/// How a token is rendered, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Listed proper noun: first letter capitalized, rest lowercase
    ProperNoun,
    /// Listed emphasis word: upper case between emphasis markers
    Emphasis,
    /// Already upper case and longer than one character: kept verbatim
    Acronym,
    /// Anything else: kept as it is
    Plain,
}

/// A token split into leading punctuation, core and trailing punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub lead: &'a str,
    pub core: &'a str,
    pub trail: &'a str,
}

impl<'a> TokenParts<'a> {
    pub fn split(token: &'a str) -> Self {
        let core_start = token
            .char_indices()
            .find(|(_, ch)| ch.is_alphanumeric())
            .map_or(token.len(), |(idx, _)| idx);
        let core_end = token
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_alphanumeric())
            .map_or(core_start, |(idx, ch)| idx + ch.len_utf8());

        Self {
            lead: &token[..core_start],
            core: &token[core_start..core_end],
            trail: &token[core_end..],
        }
    }
}

/// Classify a whitespace-free token against the word lists
pub fn classify(words: &WordLists, token: &str) -> TokenClass {
    let core = TokenParts::split(token).core;

    if !core.is_empty() {
        if words.is_proper_noun(core) {
            return TokenClass::ProperNoun;
        }
        if words.is_emphasis(core) {
            return TokenClass::Emphasis;
        }
    }

    if is_upper(token) && token.chars().count() > 1 {
        return TokenClass::Acronym;
    }

    TokenClass::Plain
}

/// Render a token according to its class
pub fn render_token(token: &str, class: TokenClass) -> Cow<'_, str> {
    match class {
        TokenClass::ProperNoun => {
            let parts = TokenParts::split(token);
            Cow::Owned(format!(
                "{}{}{}",
                parts.lead,
                capitalize(parts.core),
                parts.trail
            ))
        }
        TokenClass::Emphasis => {
            let parts = TokenParts::split(token);
            Cow::Owned(format!(
                "{}{EMPHASIS_MARKER}{}{EMPHASIS_MARKER}{}",
                parts.lead,
                parts.core.to_uppercase(),
                parts.trail
            ))
        }
        TokenClass::Acronym | TokenClass::Plain => Cow::Borrowed(token),
    }
}

/// Upper-case the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// At least one cased character and no lowercase ones
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
