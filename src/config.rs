use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::corpus::{Language, PhraseCorpus};
use crate::error::ConfigError;
use crate::nlu::DEFAULT_CONFIDENCE_THRESHOLD;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "CABIN_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Minimum cosine similarity for a match to count as an intent.
    pub confidence_threshold: f32,
    pub default_language: Language,
    /// Name the assistant introduces itself with.
    pub assistant_name: String,
    /// Replaces the built-in phrase corpus when set.
    pub corpus_path: Option<PathBuf>,
    /// Makes random picks (jokes, facts, riddles) reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            default_language: Language::English,
            assistant_name: "Joey".to_string(),
            corpus_path: None,
            rng_seed: None,
        }
    }
}

impl AssistantConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads the file named by `CABIN_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::InvalidThreshold(self.confidence_threshold));
        }
        Ok(())
    }

    pub fn corpus(&self) -> Result<PhraseCorpus, ConfigError> {
        match &self.corpus_path {
            Some(path) => PhraseCorpus::load(path),
            None => Ok(PhraseCorpus::builtin()?),
        }
    }
}
