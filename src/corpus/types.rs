use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::CorpusError;

/// Symbolic intent label (e.g. "navigate"), never free text.
pub type IntentId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One intent and its example phrases, grouped per language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentPhrases {
    pub intent: IntentId,
    pub phrases: BTreeMap<Language, Vec<String>>,
}

impl IntentPhrases {
    pub fn new(intent: impl Into<IntentId>) -> Self {
        Self {
            intent: intent.into(),
            phrases: BTreeMap::new(),
        }
    }

    pub fn with(mut self, language: Language, phrases: &[&str]) -> Self {
        self.phrases
            .entry(language)
            .or_default()
            .extend(phrases.iter().map(|p| p.to_string()));
        self
    }

    fn phrase_count(&self) -> usize {
        self.phrases.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub phrase: String,
    pub intent: IntentId,
    pub language: Language,
}

/// Immutable registry of intents and their example phrases.
///
/// Entries are flattened in declaration order (intent order, then language
/// order, then phrase order). That order is the classifier's tie-break order,
/// so it must stay index-aligned with every vector derived from it.
#[derive(Debug, Clone)]
pub struct PhraseCorpus {
    intents: Vec<IntentPhrases>,
    entries: Vec<CorpusEntry>,
}

impl PhraseCorpus {
    pub fn new(intents: Vec<IntentPhrases>) -> Result<Self, CorpusError> {
        if intents.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for group in &intents {
            if !seen.insert(group.intent.as_str()) {
                return Err(CorpusError::DuplicateIntent(group.intent.clone()));
            }
            if group.phrase_count() == 0 {
                return Err(CorpusError::EmptyIntent(group.intent.clone()));
            }
            for (language, phrases) in &group.phrases {
                for phrase in phrases {
                    let phrase = phrase.trim();
                    if phrase.is_empty() {
                        return Err(CorpusError::EmptyPhrase(group.intent.clone()));
                    }
                    entries.push(CorpusEntry {
                        phrase: phrase.to_string(),
                        intent: group.intent.clone(),
                        language: *language,
                    });
                }
            }
        }

        Ok(Self { intents, entries })
    }

    /// Parses the JSON form: an ordered array of `{ "intent", "phrases": { "en": [..], "hi": [..] } }`.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let intents: Vec<IntentPhrases> = serde_json::from_str(json)?;
        Self::new(intents)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.phrase.as_str())
    }

    pub fn intent_ids(&self) -> impl Iterator<Item = &IntentId> {
        self.intents.iter().map(|g| &g.intent)
    }

    pub fn contains_intent(&self, intent: &str) -> bool {
        self.intents.iter().any(|g| g.intent == intent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
