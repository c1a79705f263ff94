use regex::Regex;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of comparison used when splitting text into tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Granularity {
    /// Word runs, whitespace runs and single punctuation characters
    #[default]
    Word,

    /// One token per character
    Character,
}

/// Split `text` into tokens whose concatenation is exactly `text`
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Word => words(text),
        Granularity::Character => chars(text),
    }
}

fn words(text: &str) -> Vec<&str> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // Every char matches exactly one alternative, so matches tile the input.
    let re = TOKEN_RE
        .get_or_init(|| Regex::new(r"\w+|\s+|[^\w\s]").expect("token regex is valid"));

    re.find_iter(text).map(|m| m.as_str()).collect()
}

fn chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, c)| &text[start..start + c.len_utf8()])
        .collect()
}
