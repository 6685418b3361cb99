use std::sync::Arc;

use tracing::debug;

use super::vectorizer::{cosine_similarity, VectorSpaceModel};
use crate::corpus::{IntentId, PhraseCorpus};
use crate::error::CorpusError;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// `None` when the best match fell below the threshold or the input was blank.
    pub intent: Option<IntentId>,
    /// Cosine similarity of the best-matching corpus phrase, in [0, 1].
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn unrecognized(confidence: f32) -> Self {
        Self {
            intent: None,
            confidence,
        }
    }
}

/// Nearest-phrase classifier over a fitted [`VectorSpaceModel`].
pub struct IntentClassifier {
    corpus: Arc<PhraseCorpus>,
    model: VectorSpaceModel,
    // index-aligned with corpus.entries()
    vectors: Vec<Vec<f32>>,
    threshold: f32,
}

impl IntentClassifier {
    pub fn new(corpus: Arc<PhraseCorpus>, threshold: f32) -> Result<Self, CorpusError> {
        let phrases: Vec<&str> = corpus.phrases().collect();
        let model = VectorSpaceModel::fit(&phrases);

        let mut vectors = Vec::with_capacity(corpus.len());
        for entry in corpus.entries() {
            let vector = model.encode(&entry.phrase);
            if vector.iter().all(|&x| x == 0.0) {
                return Err(CorpusError::NoTerms {
                    intent: entry.intent.clone(),
                    phrase: entry.phrase.clone(),
                });
            }
            vectors.push(vector);
        }

        debug!(
            "Fitted vector space: {} phrases, {} dimensions",
            vectors.len(),
            model.dimensions()
        );

        Ok(Self {
            corpus,
            model,
            vectors,
            threshold,
        })
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text = text.trim();
        if text.is_empty() {
            return ClassificationResult::unrecognized(0.0);
        }

        let Some((index, confidence)) = self.best_match(text) else {
            return ClassificationResult::unrecognized(0.0);
        };
        let confidence = confidence.clamp(0.0, 1.0);
        let intent = &self.corpus.entries()[index].intent;

        debug!(
            "Intent candidate: '{}' with confidence {:.2}",
            intent, confidence
        );

        if confidence < self.threshold {
            return ClassificationResult::unrecognized(confidence);
        }

        ClassificationResult {
            intent: Some(intent.clone()),
            confidence,
        }
    }

    /// Index and score of the most similar corpus phrase.
    /// Ties keep the earliest entry.
    pub fn best_match(&self, text: &str) -> Option<(usize, f32)> {
        let query = self.model.encode(text);
        let mut best: Option<(usize, f32)> = None;

        for (index, vector) in self.vectors.iter().enumerate() {
            let score = cosine_similarity(&query, vector);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }

        best
    }

    pub fn corpus(&self) -> &PhraseCorpus {
        &self.corpus
    }

    pub fn model(&self) -> &VectorSpaceModel {
        &self.model
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
