use std::path::Path;

use tracing::info;

use super::types::PhraseCorpus;
use crate::error::{ConfigError, CorpusError};

/// Default bilingual in-car intent table.
const BUILTIN_INTENTS: &str = include_str!("../../assets/intents.json");

impl PhraseCorpus {
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_json(BUILTIN_INTENTS)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let corpus = Self::from_json(&json)?;
        info!("Loaded phrase corpus from {} ({} phrases)", path.display(), corpus.len());
        Ok(corpus)
    }
}
