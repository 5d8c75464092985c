//! Term tokenization
//!
//! Turns a sentence into the lowercase terms that make up its TF-IDF
//! vector. Words come from UAX #29 word boundaries and are further split
//! on anything that is not alphanumeric or `_`, so "don't" yields "don"
//! and "t". Terms shorter than the minimum length are dropped.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware term tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum term length in characters
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer keeping terms of two or more characters
    pub fn new() -> Self {
        Self {
            min_token_length: 2,
        }
    }

    /// Tokenize text into lowercase terms, in order of appearance
    pub fn terms(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .flat_map(|word| word.split(|c: char| !(c.is_alphanumeric() || c == '_')))
            .filter(|piece| piece.chars().count() >= self.min_token_length)
            .map(str::to_lowercase)
            .collect()
    }

    /// Tokenize text and drop stopwords
    pub fn content_terms(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        let mut terms = self.terms(text);
        stopwords.retain_content(&mut terms);
        terms
    }
}
