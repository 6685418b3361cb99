use std::sync::Arc;

use chrono::NaiveTime;

use cabin::corpus::Language;
use cabin::kernel::context::ContextKind;
use cabin::kernel::telemetry::event::TelemetryEvent;
use cabin::kernel::telemetry::recorder::TelemetryRecorder;
use cabin::kernel::time::FixedClock;
use cabin::nlu::IntentClassifier;
use cabin::{Assistant, AssistantConfig};

fn assistant() -> Assistant {
    let config = AssistantConfig {
        rng_seed: Some(7),
        ..AssistantConfig::default()
    };
    let corpus = Arc::new(config.corpus().unwrap());
    let classifier = Arc::new(IntentClassifier::new(corpus, config.confidence_threshold).unwrap());
    let clock = FixedClock(NaiveTime::from_hms_opt(15, 7, 0).unwrap());
    Assistant::with_classifier(classifier, config, Box::new(clock)).unwrap()
}

#[test]
fn test_turn_and_dialogue_stats() {
    let mut assistant = assistant();

    assistant.process("tell me a riddle");
    assistant.process("that's hard");
    assistant.process("what is the answer");
    assistant.process("xyzzy plugh");
    assistant.process("navigate to");
    assistant.process("translate");

    let snap = assistant.telemetry_snapshot();
    assert_eq!(snap.turn_stats.handled, 2);
    assert_eq!(snap.turn_stats.context_consumed, 2);
    assert_eq!(snap.turn_stats.unrecognized, 1);
    assert_eq!(snap.turn_stats.clarifications, 1);
    assert_eq!(snap.turn_stats.per_intent.get("navigate"), Some(&1));
    assert!((snap.turn_stats.unrecognized_ratio - 0.25).abs() < 1e-9);

    assert_eq!(snap.dialogue_stats.riddles_opened, 1);
    assert_eq!(snap.dialogue_stats.translations_opened, 1);
    assert_eq!(snap.dialogue_stats.contexts_cleared, 1);
}

#[test]
fn test_language_switch_and_session_end_events() {
    let mut assistant = assistant();

    assistant.process("switch to hindi");
    assistant.process("switch to hindi");
    assistant.process("goodbye");

    let events: Vec<_> = assistant.telemetry.events().cloned().collect();
    assert!(events.contains(&TelemetryEvent::LanguageSwitch {
        from: Language::English,
        to: Language::Hindi
    }));
    assert!(events.contains(&TelemetryEvent::SessionEnded { turns: 3 }));

    let snap = assistant.telemetry_snapshot();
    assert_eq!(snap.language_switches, 1);
    assert_eq!(snap.sessions_ended, 1);
}

#[test]
fn test_context_transitions_are_tagged() {
    let mut assistant = assistant();
    assistant.process("translate");
    assistant.process("good morning");

    assert!(assistant.telemetry.events().any(|e| *e
        == TelemetryEvent::ContextTransition {
            from: ContextKind::AwaitingTranslationPhrase,
            to: ContextKind::AwaitingTargetLanguage,
        }));
}

#[test]
fn test_events_never_carry_user_content() {
    let mut assistant = assistant();

    assistant.process("my name is arjun");
    assistant.process("navigate to the airport");
    assistant.process("translate");
    assistant.process("secret phrase");
    assistant.process("english");

    let dump = serde_json::to_string(&assistant.telemetry.events().collect::<Vec<_>>()).unwrap();
    for needle in ["arjun", "Arjun", "airport", "secret"] {
        assert!(!dump.contains(needle), "telemetry leaked '{}'", needle);
    }
}

#[test]
fn test_recorder_is_bounded() {
    let mut recorder = TelemetryRecorder::new();
    for turn in 0..10_050 {
        recorder.record(TelemetryEvent::NoIntentMatched { turn });
    }

    assert_eq!(recorder.len(), 10_000);
    assert_eq!(
        recorder.events().next(),
        Some(&TelemetryEvent::NoIntentMatched { turn: 50 })
    );

    recorder.clear();
    assert!(recorder.is_empty());
}
