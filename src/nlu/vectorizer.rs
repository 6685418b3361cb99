use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Runs of two or more word characters. Unicode-aware, so Devanagari
/// vowel signs stay attached to their consonants.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w{2,}").expect("static token pattern"));

pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// TF-IDF encoder fitted over the phrase corpus.
///
/// Weights use smoothed IDF, `ln((1 + n) / (1 + df)) + 1`, and every
/// encoded vector is L2-normalized so cosine similarity is a dot product.
#[derive(Debug, Clone)]
pub struct VectorSpaceModel {
    /// term -> dimension index, in first-seen order
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl VectorSpaceModel {
    pub fn fit<S: AsRef<str>>(phrases: &[S]) -> Self {
        let n = phrases.len() as f32;
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();

        for phrase in phrases {
            let tokens = tokenize(phrase.as_ref());
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();

            for token in &tokens {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), doc_freq.len());
                    doc_freq.push(0);
                }
            }
            for term in unique {
                if let Some(&idx) = vocabulary.get(term) {
                    doc_freq[idx] += 1;
                }
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Out-of-vocabulary terms contribute nothing; text with no known
    /// terms encodes to the zero vector.
    pub fn encode(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += self.idf[idx];
            }
        }
        normalize(&mut vector);
        vector
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

/// Both inputs must come from the same model (same dimension).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na * nb)
}

fn normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
