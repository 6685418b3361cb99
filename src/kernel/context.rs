use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dispatcher::Response;
use super::handlers::Bilingual;
use super::state::{SessionState, StateDelta};
use crate::corpus::Language;
use crate::nlu::Utterance;

/// At most one pending multi-turn exchange per session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogueContext {
    #[default]
    Idle,
    AwaitingRiddleAnswer { answer: String },
    AwaitingTranslationPhrase,
    AwaitingTargetLanguage { phrase: String },
}

impl DialogueContext {
    pub fn kind(&self) -> ContextKind {
        match self {
            DialogueContext::Idle => ContextKind::Idle,
            DialogueContext::AwaitingRiddleAnswer { .. } => ContextKind::AwaitingRiddleAnswer,
            DialogueContext::AwaitingTranslationPhrase => ContextKind::AwaitingTranslationPhrase,
            DialogueContext::AwaitingTargetLanguage { .. } => ContextKind::AwaitingTargetLanguage,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DialogueContext::Idle)
    }
}

/// Payload-free tag of a [`DialogueContext`], safe for telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    Idle,
    AwaitingRiddleAnswer,
    AwaitingTranslationPhrase,
    AwaitingTargetLanguage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContextOutcome {
    RiddleAnswered,
    /// Input did not ask for the answer; the riddle stays pending.
    RiddleNudge,
    PhraseCaptured,
    /// Blank input while waiting for the phrase; still waiting.
    PhraseNudge,
    Translated { target: Language },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextTurn {
    pub response: Response,
    pub deltas: Vec<StateDelta>,
    pub outcome: ContextOutcome,
}

/// Substrings that count as asking for the riddle's answer.
const ANSWER_MARKERS: &[&str] = &["answer", "jawab", "solution", "batao", "जवाब बताओ", "आंसर क्या है"];
const ENGLISH_MARKERS: &[&str] = &["english", "इंग्लिश", "अंग्रेजी", "angrezi"];
const HINDI_MARKERS: &[&str] = &["hindi", "हिंदी"];

const RIDDLE_ANSWER: Bilingual = Bilingual {
    en: "The answer is... {answer}",
    hi: "जवाब है... {answer}",
};
const RIDDLE_NUDGE: Bilingual = Bilingual {
    en: "That's an interesting guess! But if you want the answer, just say 'what is the answer?'",
    hi: "दिलचस्प अंदाज़ा! अगर जवाब जानना है, तो बस कहिए 'जवाब बताओ'।",
};
const ASK_TARGET: Bilingual = Bilingual {
    en: "Got it. And should I translate that to English or Hindi?",
    hi: "समझ गई। इसे अंग्रेज़ी में अनुवाद करूँ या हिंदी में?",
};
const ASK_PHRASE_AGAIN: Bilingual = Bilingual {
    en: "I didn't catch the phrase. What should I translate?",
    hi: "मैं वाक्य सुन नहीं पाई। क्या अनुवाद करना है?",
};
const TRANSLATED_HI: Bilingual = Bilingual {
    en: "Simulated translation: '{phrase}' in Hindi would be 'यह एक डेमो अनुवाद है'.",
    hi: "सिमुलेटेड अनुवाद: '{phrase}' हिंदी में होगा 'यह एक डेमो अनुवाद है'।",
};
const TRANSLATED_EN: Bilingual = Bilingual {
    en: "Simulated translation: '{phrase}' in English would be 'This is a demo translation'.",
    hi: "सिमुलेटेड अनुवाद: '{phrase}' अंग्रेज़ी में होगा 'This is a demo translation'।",
};

/// Consulted before classification on every turn. While a context is
/// pending it consumes the utterance outright.
///
/// There is no expiry: a riddle stays pending until its answer is asked for.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContextManager;

impl ContextManager {
    pub fn new() -> Self {
        Self
    }

    /// `None` means the context is idle and the turn goes to the classifier.
    pub fn handle(&self, utterance: &Utterance, session: &SessionState) -> Option<ContextTurn> {
        let language = session.active_language;
        let text = utterance.normalized.as_str();

        let turn = match &session.context {
            DialogueContext::Idle => return None,

            DialogueContext::AwaitingRiddleAnswer { answer } => {
                if contains_any(text, ANSWER_MARKERS) {
                    ContextTurn {
                        response: Response::new(
                            RIDDLE_ANSWER.get(language).replace("{answer}", answer),
                            language,
                        ),
                        deltas: vec![StateDelta::ClearContext],
                        outcome: ContextOutcome::RiddleAnswered,
                    }
                } else {
                    ContextTurn {
                        response: Response::new(RIDDLE_NUDGE.get(language), language),
                        deltas: Vec::new(),
                        outcome: ContextOutcome::RiddleNudge,
                    }
                }
            }

            DialogueContext::AwaitingTranslationPhrase => {
                if utterance.is_empty() {
                    ContextTurn {
                        response: Response::new(ASK_PHRASE_AGAIN.get(language), language),
                        deltas: Vec::new(),
                        outcome: ContextOutcome::PhraseNudge,
                    }
                } else {
                    ContextTurn {
                        response: Response::new(ASK_TARGET.get(language), language),
                        deltas: vec![StateDelta::EnterContext(
                            DialogueContext::AwaitingTargetLanguage {
                                phrase: utterance.raw.clone(),
                            },
                        )],
                        outcome: ContextOutcome::PhraseCaptured,
                    }
                }
            }

            DialogueContext::AwaitingTargetLanguage { phrase } => {
                let target = detect_target(text).unwrap_or(DEFAULT_TARGET);
                let template = match target {
                    Language::English => TRANSLATED_EN,
                    Language::Hindi => TRANSLATED_HI,
                };
                ContextTurn {
                    response: Response::new(
                        template.get(language).replace("{phrase}", phrase),
                        language,
                    ),
                    deltas: vec![StateDelta::ClearContext],
                    outcome: ContextOutcome::Translated { target },
                }
            }
        };

        debug!("Context {:?} consumed turn: {:?}", session.context.kind(), turn.outcome);
        Some(turn)
    }
}

/// Target used when the reply names no language at all.
pub const DEFAULT_TARGET: Language = Language::Hindi;

/// English markers are checked first.
pub fn detect_target(text: &str) -> Option<Language> {
    if contains_any(text, ENGLISH_MARKERS) {
        Some(Language::English)
    } else if contains_any(text, HINDI_MARKERS) {
        Some(Language::Hindi)
    } else {
        None
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}
