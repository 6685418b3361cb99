use std::sync::Arc;

use chrono::NaiveTime;

use cabin::corpus::Language;
use cabin::kernel::content;
use cabin::kernel::context::{detect_target, ContextManager, ContextOutcome, DialogueContext};
use cabin::kernel::state::{SessionState, StateDelta};
use cabin::kernel::time::FixedClock;
use cabin::nlu::{IntentClassifier, Utterance};
use cabin::{Assistant, AssistantConfig, TurnOutcome};

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
fn test_riddle_flow() {
    let mut assistant = assistant();

    // 1. Pose a riddle
    let turn = assistant.process("tell me a riddle");
    assert_eq!(turn.intent(), Some("tell_riddle"));
    let question = turn.response.text.strip_prefix("Here's a riddle for you: ").unwrap();
    let riddle = content::RIDDLES_EN
        .iter()
        .find(|r| r.question == question)
        .expect("question comes from the riddle list");
    assert_eq!(
        assistant.session.context,
        DialogueContext::AwaitingRiddleAnswer {
            answer: riddle.answer.to_string()
        }
    );

    // 2. A guess gets a nudge, riddle stays pending
    let turn = assistant.process("that's hard");
    assert_eq!(turn.outcome, TurnOutcome::Context(ContextOutcome::RiddleNudge));
    assert!(turn.response.text.contains("what is the answer"));
    assert!(!assistant.session.context.is_idle());

    // 3. Asking for the answer reveals it and clears the context
    let turn = assistant.process("what is the answer");
    assert_eq!(turn.outcome, TurnOutcome::Context(ContextOutcome::RiddleAnswered));
    assert_eq!(turn.response.text, format!("The answer is... {}", riddle.answer));
    assert!(assistant.session.context.is_idle());
}

#[test]
fn test_pending_riddle_consumes_other_commands() {
    let mut assistant = assistant();
    assistant.process("tell me a riddle");

    let turn = assistant.process("play music");
    assert_eq!(turn.outcome, TurnOutcome::Context(ContextOutcome::RiddleNudge));
    assert_eq!(turn.intent(), None);
}

#[test]
fn test_answer_request_without_riddle() {
    let mut assistant = assistant();

    let turn = assistant.process("what is the answer");
    assert_eq!(turn.intent(), Some("answer_riddle"));
    assert_eq!(
        turn.response.text,
        "I haven't asked you a riddle yet. Say 'tell me a riddle' to get one!"
    );
}

#[test]
fn test_translation_flow() {
    let mut assistant = assistant();

    let turn = assistant.process("translate");
    assert_eq!(turn.response.text, "Sure. What would you like me to translate?");
    assert_eq!(assistant.session.context, DialogueContext::AwaitingTranslationPhrase);

    // Captured verbatim, never classified
    let turn = assistant.process("Good morning");
    assert_eq!(turn.outcome, TurnOutcome::Context(ContextOutcome::PhraseCaptured));
    assert_eq!(turn.response.text, "Got it. And should I translate that to English or Hindi?");
    assert_eq!(
        assistant.session.context,
        DialogueContext::AwaitingTargetLanguage {
            phrase: "Good morning".to_string()
        }
    );

    let turn = assistant.process("hindi");
    assert_eq!(
        turn.outcome,
        TurnOutcome::Context(ContextOutcome::Translated {
            target: Language::Hindi
        })
    );
    assert_eq!(
        turn.response.text,
        "Simulated translation: 'Good morning' in Hindi would be 'यह एक डेमो अनुवाद है'."
    );
    // Naming a language here translates; it does not switch the session
    assert_eq!(assistant.session.active_language, Language::English);
    assert!(assistant.session.context.is_idle());
}

#[test]
fn test_target_defaults_to_hindi() {
    let manager = ContextManager::new();
    let mut session = SessionState::default();
    session.reduce(StateDelta::EnterContext(DialogueContext::AwaitingTargetLanguage {
        phrase: "see you".to_string(),
    }));

    let turn = manager.handle(&Utterance::new("no idea"), &session).unwrap();
    assert_eq!(turn.outcome, ContextOutcome::Translated { target: Language::Hindi });
    assert_eq!(turn.deltas, vec![StateDelta::ClearContext]);

    let turn = manager.handle(&Utterance::new("English please"), &session).unwrap();
    assert_eq!(turn.outcome, ContextOutcome::Translated { target: Language::English });
}

#[test]
fn test_target_detection_prefers_english() {
    assert_eq!(detect_target("hindi or english"), Some(Language::English));
    assert_eq!(detect_target("हिंदी में"), Some(Language::Hindi));
    assert_eq!(detect_target("angrezi"), Some(Language::English));
    assert_eq!(detect_target("french"), None);
}

#[test]
fn test_blank_phrase_keeps_waiting() {
    let manager = ContextManager::new();
    let mut session = SessionState::default();
    session.reduce(StateDelta::EnterContext(DialogueContext::AwaitingTranslationPhrase));

    let turn = manager.handle(&Utterance::new("   "), &session).unwrap();
    assert_eq!(turn.outcome, ContextOutcome::PhraseNudge);
    assert!(turn.deltas.is_empty());
}

#[test]
fn test_idle_context_passes_turn_through() {
    let manager = ContextManager::new();
    let session = SessionState::default();

    assert!(manager.handle(&Utterance::new("what is the answer"), &session).is_none());
}

#[test]
fn test_riddle_in_hindi_session() {
    let mut assistant = assistant();
    assistant.process("switch to hindi");

    let turn = assistant.process("पहेली सुनाओ");
    assert_eq!(turn.intent(), Some("tell_riddle"));
    assert_eq!(turn.response.language, Language::Hindi);
    let DialogueContext::AwaitingRiddleAnswer { answer } = assistant.session.context.clone() else {
        panic!("riddle should be pending");
    };
    assert!(content::RIDDLES_HI.iter().any(|r| r.answer == answer));

    let turn = assistant.process("जवाब बताओ");
    assert_eq!(turn.response.text, format!("जवाब है... {}", answer));
}
