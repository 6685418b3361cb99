use serde::{Deserialize, Serialize};

use crate::corpus::{IntentId, Language};
use crate::kernel::context::ContextKind;

// Allowed: IDs, Enums, Counts
// Forbidden: Utterance text, Entities, User names

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    IntentHandled {
        intent: IntentId,
        turn: u64,
    },

    NoIntentMatched {
        turn: u64,
    },

    Clarification {
        intent: IntentId,
        turn: u64,
    },

    /// A pending context swallowed the turn.
    ContextConsumed {
        kind: ContextKind,
        turn: u64,
    },

    ContextTransition {
        from: ContextKind,
        to: ContextKind,
    },

    LanguageSwitch {
        from: Language,
        to: Language,
    },

    SessionEnded {
        turns: u64,
    },
}
