//! # lexrank_scribe
//!
//! Graph-based extractive summarization with an optional abstractive
//! path and HTTP front end.
//!
//! The extractive summarizer splits a document into sentences, builds a
//! TF-IDF cosine similarity graph over them, scores each sentence with
//! PageRank and returns the top-K sentences verbatim.
//!
//! ## Features
//!
//! - **Deterministic**: identical input and configuration give identical output
//! - **Unicode-aware**: UAX #29 sentence and word boundaries
//! - **Pluggable**: abstractive summaries go through any [`TextGenerator`]
//! - **Service**: the `server` feature adds an axum HTTP API and a Gemini client
//!
//! ```
//! use lexrank_scribe::extractive_summarize;
//!
//! let text = "Cats are mammals. Cats have fur. The sky is blue.";
//! let summary = extractive_summarize(text, 2).unwrap();
//! assert_eq!(summary, "Cats are mammals. Cats have fur.");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use errors::{ConvergenceWarning, Result, SummarizeError};
pub use types::{Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{splitter::SentenceSplitter, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{GraphRanker, PageRankResult, StandardPageRank};
pub use similarity::{SimilarityEstimator, SimilarityMatrix, TermVector, TfidfVectorizer};
pub use summarizer::{
    extractive_summarize, AbstractiveSummarizer, ExtractiveSummarizer, ExtractiveSummary,
    SentenceSelector, TextGenerator, UnconfiguredGenerator, VariationDecorator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
