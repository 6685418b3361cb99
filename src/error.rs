use thiserror::Error;

use crate::corpus::IntentId;

/// Rejections raised while assembling the phrase corpus.
/// All of these surface at startup, never mid-conversation.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus contains no intents")]
    EmptyCorpus,

    #[error("intent '{0}' has no example phrases")]
    EmptyIntent(IntentId),

    #[error("intent '{0}' is declared more than once")]
    DuplicateIntent(IntentId),

    #[error("intent '{0}' contains a blank phrase")]
    EmptyPhrase(IntentId),

    /// Phrase produced no indexable terms, so it could never be matched.
    #[error("phrase '{phrase}' of intent '{intent}' has no indexable terms")]
    NoTerms { intent: IntentId, phrase: String },

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("confidence threshold {0} is outside [0, 1]")]
    InvalidThreshold(f32),

    /// The corpus names an intent the dispatcher has no handler record for.
    #[error("intent '{0}' has no dispatcher handler")]
    UnhandledIntent(IntentId),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
