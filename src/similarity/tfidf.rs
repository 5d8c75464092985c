//! TF-IDF weighting
//!
//! The vocabulary is built jointly over all sentences of one document.
//! Weights are raw term counts times the smoothed inverse document
//! frequency `ln((1 + n) / (1 + df)) + 1`, then each sentence vector is
//! scaled to unit length.

use super::vector::TermVector;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::SummarizerConfig;
use rustc_hash::FxHashMap;

/// Result of fitting TF-IDF weights to a set of sentences
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    /// Vocabulary terms, indexed by term id (sorted alphabetically)
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per term id
    pub idf: Vec<f64>,
    /// One unit vector per input sentence, in input order
    pub vectors: Vec<TermVector>,
}

impl TfidfModel {
    /// Look up the id of a term
    pub fn term_id(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| i as u32)
    }
}

/// Builds TF-IDF term vectors for the sentences of a document
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the given stopword filter
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords,
        }
    }

    /// Create a vectorizer from summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(StopwordFilter::from_config(config))
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Fit the vocabulary on `sentences` and weight each of them
    pub fn fit_transform<S: AsRef<str>>(&self, sentences: &[S]) -> TfidfModel {
        let counts: Vec<FxHashMap<String, usize>> = sentences
            .iter()
            .map(|s| {
                let mut counts: FxHashMap<String, usize> = FxHashMap::default();
                for term in self.tokenizer.content_terms(s.as_ref(), &self.stopwords) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence_counts in &counts {
            for term in sentence_counts.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> =
            document_frequency.keys().map(|t| t.to_string()).collect();
        vocabulary.sort_unstable();

        let term_ids: FxHashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(id, term)| (term.as_str(), id as u32))
            .collect();

        let n = sentences.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = document_frequency[term.as_str()] as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = counts
            .iter()
            .map(|sentence_counts| {
                let weights = sentence_counts
                    .iter()
                    .map(|(term, &tf)| {
                        let id = term_ids[term.as_str()];
                        (id, tf as f64 * idf[id as usize])
                    })
                    .collect();
                TermVector::from_weights(weights)
            })
            .collect();

        TfidfModel {
            vocabulary,
            idf,
            vectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_excludes_stopwords_and_is_sorted() {
        let vectorizer = TfidfVectorizer::default();
        let model = vectorizer.fit_transform(&["Cats are mammals.", "Cats have fur."]);

        assert_eq!(model.vocabulary, vec!["cats", "fur", "mammals"]);
        assert_eq!(model.vectors.len(), 2);
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = TfidfVectorizer::default();
        let model = vectorizer.fit_transform(&["Cats are mammals.", "Cats have fur.", "Dogs bark."]);

        let cats = model.term_id("cats").unwrap() as usize;
        let fur = model.term_id("fur").unwrap() as usize;

        assert!((model.idf[cats] - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((model.idf[fur] - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectorizer = TfidfVectorizer::default();
        let model = vectorizer.fit_transform(&[
            "Rust compilers check ownership rules.",
            "Ownership rules prevent data races.",
        ]);

        for vector in &model.vectors {
            let length: f64 = vector.entries().iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((length - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_term_frequency_counts() {
        let vectorizer = TfidfVectorizer::new(StopwordFilter::empty());
        let model = vectorizer.fit_transform(&["red red blue"]);

        let red = model.term_id("red").unwrap();
        let blue = model.term_id("blue").unwrap();
        let vector = &model.vectors[0];

        // Single document: both terms share idf, so weights keep the 2:1 count ratio
        assert!((vector.weight(red) / vector.weight(blue) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_stopword_sentence_yields_zero_vector() {
        let vectorizer = TfidfVectorizer::default();
        let model = vectorizer.fit_transform(&["It is what it is.", "Cats have fur."]);

        assert!(model.vectors[0].is_empty());
        assert!(!model.vectors[1].is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let vectorizer = TfidfVectorizer::default();
        let model = vectorizer.fit_transform(&["It is.", "Was it?"]);

        assert!(model.vocabulary.is_empty());
        assert!(model.vectors.iter().all(TermVector::is_empty));
    }
}
