use std::io::Write;

use cabin::corpus::Language;
use cabin::error::{ConfigError, CorpusError};
use cabin::nlu::DEFAULT_CONFIDENCE_THRESHOLD;
use cabin::{Assistant, AssistantConfig};

#[test]
fn test_defaults() {
    let config = AssistantConfig::from_json("{}").unwrap();

    assert_eq!(config, AssistantConfig::default());
    assert_eq!(config.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
    assert_eq!(config.default_language, Language::English);
    assert_eq!(config.assistant_name, "Joey");
}

#[test]
fn test_partial_overrides() {
    let config = AssistantConfig::from_json(
        r#"{ "confidence_threshold": 0.4, "default_language": "hi", "rng_seed": 3 }"#,
    )
    .unwrap();

    assert_eq!(config.confidence_threshold, 0.4);
    assert_eq!(config.default_language, Language::Hindi);
    assert_eq!(config.rng_seed, Some(3));
    assert_eq!(config.assistant_name, "Joey");
}

#[test]
fn test_threshold_out_of_range_is_rejected() {
    assert!(matches!(
        AssistantConfig::from_json(r#"{ "confidence_threshold": 1.5 }"#),
        Err(ConfigError::InvalidThreshold(t)) if t == 1.5
    ));

    let config = AssistantConfig {
        confidence_threshold: -0.1,
        ..AssistantConfig::default()
    };
    assert!(Assistant::new(config).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "assistant_name": "Mira", "default_language": "hi" }}"#).unwrap();

    let config = AssistantConfig::load(file.path()).unwrap();
    assert_eq!(config.assistant_name, "Mira");

    let assistant = Assistant::new(config).unwrap();
    let ready = assistant.ready_prompt();
    assert_eq!(ready.language, Language::Hindi);
    assert!(ready.text.contains("Mira"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(AssistantConfig::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn test_custom_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = dir.path().join("intents.json");
    std::fs::write(
        &corpus_path,
        r#"[
            { "intent": "greeting", "phrases": { "en": ["hello", "good day"] } },
            { "intent": "goodbye", "phrases": { "en": ["bye"], "hi": ["अलविदा"] } }
        ]"#,
    )
    .unwrap();

    let config = AssistantConfig {
        corpus_path: Some(corpus_path),
        ..AssistantConfig::default()
    };
    let mut assistant = Assistant::new(config).unwrap();

    assert_eq!(assistant.classifier().corpus().len(), 4);
    assert_eq!(assistant.process("good day").intent(), Some("greeting"));
    assert_eq!(assistant.process("navigate to the airport").intent(), None);
}

#[test]
fn test_custom_corpus_with_unknown_intent_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = dir.path().join("intents.json");
    std::fs::write(
        &corpus_path,
        r#"[ { "intent": "fly_to_moon", "phrases": { "en": ["fly me to the moon"] } } ]"#,
    )
    .unwrap();

    let config = AssistantConfig {
        corpus_path: Some(corpus_path),
        ..AssistantConfig::default()
    };
    assert!(matches!(
        Assistant::new(config).err(),
        Some(ConfigError::UnhandledIntent(ref i)) if i == "fly_to_moon"
    ));
}

#[test]
fn test_custom_corpus_with_empty_intent_fails_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let corpus_path = dir.path().join("intents.json");
    std::fs::write(&corpus_path, r#"[ { "intent": "greeting", "phrases": { "en": [] } } ]"#).unwrap();

    let config = AssistantConfig {
        corpus_path: Some(corpus_path),
        ..AssistantConfig::default()
    };
    assert!(matches!(
        Assistant::new(config).err(),
        Some(ConfigError::Corpus(CorpusError::EmptyIntent(_)))
    ));
}
