use std::collections::{HashMap, VecDeque};

use super::event::TelemetryEvent;
use crate::kernel::context::ContextKind;

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub dialogue_stats: DialogueStats,
    pub language_switches: u64,
    pub sessions_ended: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TurnStats {
    pub handled: u64,
    pub unrecognized: u64,
    pub clarifications: u64,
    pub context_consumed: u64,
    pub per_intent: HashMap<String, u64>,
    /// Share of classified turns that fell under the threshold.
    pub unrecognized_ratio: f64,
}

#[derive(Debug, Clone, Default)]
pub struct DialogueStats {
    pub riddles_opened: u64,
    pub translations_opened: u64,
    pub contexts_cleared: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::IntentHandled { intent, .. } => {
                snap.turn_stats.handled += 1;
                *snap.turn_stats.per_intent.entry(intent.clone()).or_insert(0) += 1;
            }
            TelemetryEvent::NoIntentMatched { .. } => snap.turn_stats.unrecognized += 1,
            TelemetryEvent::Clarification { intent, .. } => {
                snap.turn_stats.clarifications += 1;
                *snap.turn_stats.per_intent.entry(intent.clone()).or_insert(0) += 1;
            }
            TelemetryEvent::ContextConsumed { .. } => snap.turn_stats.context_consumed += 1,
            TelemetryEvent::ContextTransition { from, to } => match (from, to) {
                (_, ContextKind::AwaitingRiddleAnswer) => snap.dialogue_stats.riddles_opened += 1,
                (_, ContextKind::AwaitingTranslationPhrase) => {
                    snap.dialogue_stats.translations_opened += 1
                }
                (ContextKind::Idle, ContextKind::Idle) => {}
                (_, ContextKind::Idle) => snap.dialogue_stats.contexts_cleared += 1,
                _ => {}
            },
            TelemetryEvent::LanguageSwitch { .. } => snap.language_switches += 1,
            TelemetryEvent::SessionEnded { .. } => snap.sessions_ended += 1,
        }
    }

    let classified = snap.turn_stats.handled + snap.turn_stats.clarifications + snap.turn_stats.unrecognized;
    if classified > 0 {
        snap.turn_stats.unrecognized_ratio = snap.turn_stats.unrecognized as f64 / classified as f64;
    }

    snap
}
