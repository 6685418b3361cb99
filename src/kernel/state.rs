use crate::corpus::Language;
use super::context::DialogueContext;

/// Strict state delta. This is the ONLY way session state mutates.
#[derive(Debug, Clone, PartialEq)]
pub enum StateDelta {
    SwitchLanguage(Language),
    RememberName(String),
    /// Replaces whatever context was pending.
    EnterContext(DialogueContext),
    ClearContext,
    EndSession,
}

/// Per-run conversation state. Single writer: the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub active_language: Language,
    pub user_name: Option<String>,
    pub context: DialogueContext,
    /// Cleared by the goodbye intent; the harness stops listening.
    pub listening: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self {
            active_language: language,
            user_name: None,
            context: DialogueContext::Idle,
            listening: true,
        }
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        match delta {
            StateDelta::SwitchLanguage(language) => self.active_language = language,
            StateDelta::RememberName(name) => self.user_name = Some(name),
            StateDelta::EnterContext(context) => self.context = context,
            StateDelta::ClearContext => self.context = DialogueContext::Idle,
            StateDelta::EndSession => self.listening = false,
        }
    }

    pub fn apply(&mut self, deltas: Vec<StateDelta>) {
        for delta in deltas {
            self.reduce(delta);
        }
    }
}
