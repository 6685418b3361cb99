use cabin::corpus::{IntentPhrases, Language, PhraseCorpus};
use cabin::error::CorpusError;

#[test]
fn test_builtin_corpus_is_bilingual() {
    let corpus = PhraseCorpus::builtin().unwrap();

    assert!(corpus.contains_intent("navigate"));
    assert!(corpus.contains_intent("tell_riddle"));
    assert!(corpus.entries().iter().any(|e| e.language == Language::English));
    assert!(corpus.entries().iter().any(|e| e.language == Language::Hindi));
}

#[test]
fn test_entries_follow_declaration_order() {
    let corpus = PhraseCorpus::new(vec![
        IntentPhrases::new("b")
            .with(Language::Hindi, &["दूसरा"])
            .with(Language::English, &["second"]),
        IntentPhrases::new("a").with(Language::English, &["first one", "first two"]),
    ])
    .unwrap();

    let phrases: Vec<&str> = corpus.phrases().collect();
    // languages are grouped English first within an intent
    assert_eq!(phrases, vec!["second", "दूसरा", "first one", "first two"]);
    assert_eq!(corpus.intent_ids().cloned().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn test_intent_without_phrases_is_rejected() {
    let json = r#"[
        { "intent": "greeting", "phrases": { "en": ["hello"] } },
        { "intent": "silent", "phrases": { "en": [], "hi": [] } }
    ]"#;

    match PhraseCorpus::from_json(json) {
        Err(CorpusError::EmptyIntent(intent)) => assert_eq!(intent, "silent"),
        other => panic!("expected EmptyIntent, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_duplicate_and_blank_entries_are_rejected() {
    let dup = PhraseCorpus::new(vec![
        IntentPhrases::new("x").with(Language::English, &["one"]),
        IntentPhrases::new("x").with(Language::English, &["two"]),
    ]);
    assert!(matches!(dup, Err(CorpusError::DuplicateIntent(ref i)) if i == "x"));

    let blank = PhraseCorpus::new(vec![IntentPhrases::new("y").with(Language::English, &["  "])]);
    assert!(matches!(blank, Err(CorpusError::EmptyPhrase(_))));

    assert!(matches!(PhraseCorpus::new(vec![]), Err(CorpusError::EmptyCorpus)));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(PhraseCorpus::from_json("{ not json"), Err(CorpusError::Parse(_))));
    assert!(matches!(
        PhraseCorpus::from_json(r#"[{ "intent": "x", "phrases": { "fr": ["bonjour"] } }]"#),
        Err(CorpusError::Parse(_))
    ));
}
