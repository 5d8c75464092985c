//! Conversational prefixes for finished summaries
//!
//! Applied to a summary after it has been produced; ranking never sees it.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Built-in lead-in phrases
pub const VARIATIONS: [&str; 5] = [
    "It seems to me that:",
    "From what I can gather:",
    "After going through the details, it appears that:",
    "Considering all aspects, I'd say:",
    "In my opinion, based on the information provided:",
];

/// Prefixes a summary with a randomly chosen lead-in
#[derive(Debug, Clone)]
pub struct VariationDecorator {
    prefixes: Vec<String>,
}

impl Default for VariationDecorator {
    fn default() -> Self {
        Self::new(VARIATIONS.iter().map(|v| v.to_string()).collect())
    }
}

impl VariationDecorator {
    /// Create a decorator choosing among `prefixes`
    ///
    /// With no prefixes the summary passes through unchanged.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// The candidate prefixes
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Prefix `summary` using the thread-local RNG
    pub fn apply(&self, summary: &str) -> String {
        self.apply_with(summary, &mut rand::rng())
    }

    /// Prefix `summary` using the given RNG
    pub fn apply_with<R: Rng + ?Sized>(&self, summary: &str, rng: &mut R) -> String {
        match self.prefixes.choose(rng) {
            Some(prefix) => format!("{} {}", prefix, summary),
            None => summary.to_string(),
        }
    }
}
