//! Utterance understanding: term-weighted vector space, nearest-phrase
//! intent classification and per-intent entity rules.
//!
//! Everything here is built once at startup and read-only afterwards,
//! so a fitted classifier can be shared across threads behind an `Arc`.

pub mod vectorizer;
pub mod classifier;
pub mod entity;

pub use vectorizer::*;
pub use classifier::*;
pub use entity::*;

/// One turn of input: the text as heard plus its normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub raw: String,
    /// Lower-cased, trimmed, inner whitespace collapsed.
    pub normalized: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            normalized: normalize(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
