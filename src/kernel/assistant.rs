use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use super::dispatcher::{CommandDispatcher, Response, Turn, TurnOutcome};
use super::handlers::Bilingual;
use super::state::SessionState;
use super::telemetry::event::TelemetryEvent;
use super::telemetry::metrics::TelemetrySnapshot;
use super::telemetry::recorder::TelemetryRecorder;
use super::time::{Clock, SystemClock};
use crate::config::AssistantConfig;
use crate::error::ConfigError;
use crate::nlu::IntentClassifier;
use crate::outputs::voice::VoiceSink;

/// Concurrent callers must share one assistant through this lock so
/// whole turns are serialized.
pub type SharedAssistant = Arc<Mutex<Assistant>>;

const READY: Bilingual = Bilingual::new(
    "Hi, I'm {assistant}. I'm ready when you are.",
    "नमस्ते, मैं {assistant} हूँ। जब आप तैयार हों, मैं तैयार हूँ।",
);

/// One conversation: session state, the dispatcher that mutates it, and
/// the telemetry observing it.
pub struct Assistant {
    pub session: SessionState,
    dispatcher: CommandDispatcher,
    pub telemetry: TelemetryRecorder,
    assistant_name: String,
    /// Turns processed so far. Kept out of `SessionState` so an
    /// unrecognized turn leaves the session untouched.
    turns: u64,
}

impl Assistant {
    /// Builds the corpus and fits the classifier. Corpus or handler
    /// problems are rejected here, before the first turn.
    pub fn new(config: AssistantConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let corpus = Arc::new(config.corpus()?);
        let classifier = Arc::new(IntentClassifier::new(corpus, config.confidence_threshold)?);
        info!(
            "Classifier ready: {} phrases, {} intents, threshold {:.2}",
            classifier.corpus().len(),
            classifier.corpus().intent_ids().count(),
            classifier.threshold()
        );
        Self::with_classifier(classifier, config, Box::new(SystemClock))
    }

    /// Reuses an already fitted classifier, e.g. one shared by several sessions.
    pub fn with_classifier(
        classifier: Arc<IntentClassifier>,
        config: AssistantConfig,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let dispatcher = CommandDispatcher::builtin(classifier, &config, clock)?;
        Ok(Self {
            session: SessionState::new(config.default_language),
            dispatcher,
            telemetry: TelemetryRecorder::new(),
            assistant_name: config.assistant_name,
            turns: 0,
        })
    }

    pub fn shared(self) -> SharedAssistant {
        Arc::new(Mutex::new(self))
    }

    pub fn process(&mut self, text: &str) -> Turn {
        self.turns += 1;
        let before = self.session.clone();
        let turn = self.dispatcher.process(text, &mut self.session);
        self.observe(&before, &turn);
        turn
    }

    /// Async driver loop: one utterance in, one response out, until the
    /// goodbye intent is served or the input side hangs up.
    pub async fn run<V: VoiceSink>(
        &mut self,
        mut inputs: mpsc::Receiver<String>,
        voice: &mut V,
    ) -> anyhow::Result<()> {
        voice.speak(&self.ready_prompt())?;

        while self.is_listening() {
            let Some(line) = inputs.recv().await else {
                info!("Input closed; leaving the conversation");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let turn = self.process(&line);
            debug!("Turn {} resolved as {:?}", self.turns, turn.outcome);
            voice.speak(&turn.response)?;
        }

        Ok(())
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// False once the goodbye intent has been served.
    pub fn is_listening(&self) -> bool {
        self.session.listening
    }

    pub fn ready_prompt(&self) -> Response {
        let language = self.session.active_language;
        Response::new(
            READY.get(language).replace("{assistant}", &self.assistant_name),
            language,
        )
    }

    pub fn classifier(&self) -> &Arc<IntentClassifier> {
        self.dispatcher.classifier()
    }

    pub fn telemetry_snapshot(&self) -> TelemetrySnapshot {
        self.telemetry.snapshot()
    }

    fn observe(&mut self, before: &SessionState, turn: &Turn) {
        let turn_no = self.turns;
        let event = match &turn.outcome {
            TurnOutcome::Context(_) => TelemetryEvent::ContextConsumed {
                kind: before.context.kind(),
                turn: turn_no,
            },
            TurnOutcome::Handled { intent, .. } => TelemetryEvent::IntentHandled {
                intent: intent.clone(),
                turn: turn_no,
            },
            TurnOutcome::NoIntentMatched { .. } => TelemetryEvent::NoIntentMatched { turn: turn_no },
            TurnOutcome::MissingRequiredEntity { intent, .. } => TelemetryEvent::Clarification {
                intent: intent.clone(),
                turn: turn_no,
            },
        };
        self.telemetry.record(event);

        let (from, to) = (before.context.kind(), self.session.context.kind());
        if from != to {
            self.telemetry.record(TelemetryEvent::ContextTransition { from, to });
        }
        if before.active_language != self.session.active_language {
            self.telemetry.record(TelemetryEvent::LanguageSwitch {
                from: before.active_language,
                to: self.session.active_language,
            });
        }
        if before.listening && !self.session.listening {
            info!("Session ended after {} turns", turn_no);
            self.telemetry.record(TelemetryEvent::SessionEnded { turns: turn_no });
        }
    }
}
