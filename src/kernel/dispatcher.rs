use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::content;
use super::context::{ContextManager, ContextOutcome, DialogueContext};
use super::handlers::{Action, Bilingual, HandlerTable, IntentHandler, Reply};
use super::state::{SessionState, StateDelta};
use super::time::Clock;
use crate::config::AssistantConfig;
use crate::corpus::{IntentId, Language};
use crate::error::ConfigError;
use crate::nlu::{EntityExtractor, IntentClassifier, Utterance};

const NOT_UNDERSTOOD: Bilingual = Bilingual::new(
    "Sorry, I didn't quite get that. Could you please rephrase?",
    "माफ़ कीजिए, मैं समझ नहीं पाई। क्या आप दूसरे शब्दों में दोहरा सकते हैं?",
);

/// What gets handed to the speech-synthesis side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub text: String,
    pub language: Language,
}

impl Response {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }
}

/// How a turn was resolved. None of these are errors; each already
/// carries a user-facing response in [`Turn`].
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// A pending dialogue context consumed the utterance.
    Context(ContextOutcome),
    Handled {
        intent: IntentId,
        confidence: f32,
        entity: Option<String>,
    },
    /// Blank input or best similarity under the threshold.
    NoIntentMatched { confidence: f32 },
    /// Intent needs an entity and none was found; a follow-up was asked.
    /// The next turn is classified from scratch.
    MissingRequiredEntity { intent: IntentId, confidence: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub response: Response,
    pub outcome: TurnOutcome,
}

impl Turn {
    pub fn intent(&self) -> Option<&str> {
        match &self.outcome {
            TurnOutcome::Handled { intent, .. }
            | TurnOutcome::MissingRequiredEntity { intent, .. } => Some(intent),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Slots {
    entity: Option<String>,
    riddle: Option<&'static str>,
}

/// Per-turn entry point: context first, then classify, extract, and run
/// the intent's handler record.
pub struct CommandDispatcher {
    classifier: Arc<IntentClassifier>,
    extractor: EntityExtractor,
    context: ContextManager,
    handlers: HandlerTable,
    clock: Box<dyn Clock>,
    rng: StdRng,
    assistant_name: String,
}

impl CommandDispatcher {
    pub fn new(
        classifier: Arc<IntentClassifier>,
        extractor: EntityExtractor,
        handlers: HandlerTable,
        config: &AssistantConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        handlers.validate(classifier.corpus())?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            classifier,
            extractor,
            context: ContextManager::new(),
            handlers,
            clock,
            rng,
            assistant_name: config.assistant_name.clone(),
        })
    }

    /// Built-in entity rules and handler table.
    pub fn builtin(
        classifier: Arc<IntentClassifier>,
        config: &AssistantConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            classifier,
            EntityExtractor::builtin(),
            HandlerTable::builtin(),
            config,
            clock,
        )
    }

    pub fn classifier(&self) -> &Arc<IntentClassifier> {
        &self.classifier
    }

    /// Runs one turn to completion, mutating `session` only through deltas.
    pub fn process(&mut self, text: &str, session: &mut SessionState) -> Turn {
        let utterance = Utterance::new(text);

        if let Some(turn) = self.context.handle(&utterance, session) {
            session.apply(turn.deltas);
            return Turn {
                response: turn.response,
                outcome: TurnOutcome::Context(turn.outcome),
            };
        }

        let result = self.classifier.classify(&utterance.normalized);
        let Some(intent) = result.intent else {
            let language = session.active_language;
            return Turn {
                response: Response::new(NOT_UNDERSTOOD.get(language), language),
                outcome: TurnOutcome::NoIntentMatched {
                    confidence: result.confidence,
                },
            };
        };

        let entity = self.extractor.extract(&intent, &utterance.normalized);
        debug!("Intent '{}' ({:.2}), entity present: {}", intent, result.confidence, entity.is_some());

        self.dispatch(intent, result.confidence, entity, session)
    }

    fn dispatch(
        &mut self,
        intent: IntentId,
        confidence: f32,
        entity: Option<String>,
        session: &mut SessionState,
    ) -> Turn {
        let Some(handler) = self.handlers.get(&intent).cloned() else {
            // validate() rules this out for corpus intents
            warn!("No handler for intent '{}'", intent);
            let language = session.active_language;
            return Turn {
                response: Response::new(NOT_UNDERSTOOD.get(language), language),
                outcome: TurnOutcome::NoIntentMatched { confidence },
            };
        };

        if let (Some(clarify), None) = (handler.clarify, &entity) {
            let language = session.active_language;
            return Turn {
                response: Response::new(clarify.get(language), language),
                outcome: TurnOutcome::MissingRequiredEntity { intent, confidence },
            };
        }

        let mut slots = Slots {
            entity,
            riddle: None,
        };

        match self.effects(&handler, &mut slots, session) {
            Ok(deltas) => session.apply(deltas),
            Err(already) => {
                let language = session.active_language;
                return Turn {
                    response: Response::new(already.get(language), language),
                    outcome: TurnOutcome::Handled {
                        intent,
                        confidence,
                        entity: slots.entity,
                    },
                };
            }
        }

        // Rendered after the deltas so a language switch answers in the new language.
        let language = session.active_language;
        let template = match handler.reply {
            Reply::Say(text) => text.get(language),
            Reply::OneOf { .. } => self
                .pick(handler.reply.choices(language))
                .copied()
                .unwrap_or_default(),
        };
        let text = self.render(template, &slots, session);

        Turn {
            response: Response::new(text, language),
            outcome: TurnOutcome::Handled {
                intent,
                confidence,
                entity: slots.entity,
            },
        }
    }

    /// Session deltas for the handler's action. `Err` carries the
    /// "already active" reply of a no-op language switch.
    fn effects(
        &mut self,
        handler: &IntentHandler,
        slots: &mut Slots,
        session: &SessionState,
    ) -> Result<Vec<StateDelta>, Bilingual> {
        let deltas = match handler.action {
            Action::None => Vec::new(),
            Action::SwitchLanguage { target, already } => {
                if session.active_language == target {
                    return Err(already);
                }
                info!("Switching language {} -> {}", session.active_language, target);
                vec![StateDelta::SwitchLanguage(target)]
            }
            Action::RememberName => slots
                .entity
                .as_deref()
                .and_then(first_name)
                .map(StateDelta::RememberName)
                .into_iter()
                .collect(),
            Action::PoseRiddle => {
                match self.pick(content::riddles(session.active_language)).copied() {
                    Some(riddle) => {
                        slots.riddle = Some(riddle.question);
                        vec![StateDelta::EnterContext(DialogueContext::AwaitingRiddleAnswer {
                            answer: riddle.answer.to_string(),
                        })]
                    }
                    None => Vec::new(),
                }
            }
            Action::BeginTranslation => {
                vec![StateDelta::EnterContext(DialogueContext::AwaitingTranslationPhrase)]
            }
            Action::EndSession => vec![StateDelta::EndSession],
        };
        Ok(deltas)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.rng.random_range(0..items.len())])
    }

    fn render(&self, template: &str, slots: &Slots, session: &SessionState) -> String {
        let name = session.user_name.as_deref().unwrap_or_default();
        let name_part = if name.is_empty() {
            String::new()
        } else {
            format!(", {}", name)
        };

        let mut text = template
            .replace("{entity}", slots.entity.as_deref().unwrap_or_default())
            .replace("{name_part}", &name_part)
            .replace("{name}", name)
            .replace("{riddle}", slots.riddle.unwrap_or_default())
            .replace("{assistant}", &self.assistant_name);
        if text.contains("{time}") {
            text = text.replace("{time}", &self.clock.spoken());
        }
        text
    }
}

/// First word of the extracted entity, capitalized.
pub fn first_name(entity: &str) -> Option<String> {
    let word = entity.split_whitespace().next()?;
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}
