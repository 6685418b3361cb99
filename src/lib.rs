pub mod config;
pub mod corpus;
pub mod error;
pub mod kernel;
pub mod nlu;
pub mod outputs;

// Re-export specific items if needed for convenient access
pub use config::AssistantConfig;
pub use corpus::{Language, PhraseCorpus};
pub use kernel::assistant::{Assistant, SharedAssistant};
pub use kernel::dispatcher::{Response, Turn, TurnOutcome};
