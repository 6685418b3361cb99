use std::sync::Arc;

use chrono::NaiveTime;
use tokio::sync::mpsc;

use cabin::corpus::Language;
use cabin::kernel::time::FixedClock;
use cabin::nlu::IntentClassifier;
use cabin::outputs::voice::{ConsoleVoice, RecordingVoice};
use cabin::{Assistant, AssistantConfig, Response};

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

#[tokio::test]
async fn test_run_stops_after_goodbye() {
    let mut assistant = assistant();
    let mut voice = RecordingVoice::default();
    let (tx, rx) = mpsc::channel(8);

    for line in ["hello", "goodbye", "hello"] {
        tx.send(line.to_string()).await.unwrap();
    }

    assistant.run(rx, &mut voice).await.unwrap();

    // ready prompt + two replies; the last line is never read
    assert_eq!(voice.spoken.len(), 3);
    assert_eq!(voice.spoken[0].text, "Hi, I'm Joey. I'm ready when you are.");
    assert_eq!(voice.spoken[2].text, "Goodbye! Drive safe.");
    assert!(!assistant.is_listening());
}

#[tokio::test]
async fn test_run_ends_when_input_closes() {
    let mut assistant = assistant();
    let mut voice = RecordingVoice::default();
    let (tx, rx) = mpsc::channel(8);

    tx.send("   ".to_string()).await.unwrap();
    tx.send("what time is it".to_string()).await.unwrap();
    drop(tx);

    assistant.run(rx, &mut voice).await.unwrap();

    assert_eq!(voice.spoken.len(), 2);
    assert_eq!(voice.spoken[1].text, "It's 03:07 PM.");
    // blank lines are not turns
    assert_eq!(assistant.turns(), 1);
    assert!(assistant.is_listening());
}

#[tokio::test]
async fn test_shared_assistant_serializes_turns() {
    let shared = assistant().shared();

    let mut handles = Vec::new();
    for text in ["hello", "tell me a fact", "volume up", "what time is it"] {
        let shared = Arc::clone(&shared);
        handles.push(tokio::spawn(async move {
            let mut assistant = shared.lock().await;
            assistant.process(text)
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().intent().is_some());
    }

    let assistant = shared.lock().await;
    assert_eq!(assistant.turns(), 4);
    assert_eq!(assistant.telemetry_snapshot().turn_stats.handled, 4);
}

#[test]
fn test_console_voice_line() {
    let voice = ConsoleVoice::new("Joey");
    let line = voice.line(&Response::new("नमस्ते!", Language::Hindi));

    assert_eq!(line, "[JOEY SPEAKS (hi)] >> नमस्ते!");
}
