//! Summarization strategies
//!
//! Extractive summarization ranks and selects existing sentences;
//! abstractive summarization delegates to a generative model. The
//! variation decorator dresses up either result for presentation.

pub mod abstractive;
pub mod extractive;
pub mod selector;
pub mod variation;

pub use abstractive::{AbstractiveSummarizer, TextGenerator, UnconfiguredGenerator};
pub use extractive::{extractive_summarize, ExtractiveSummarizer, ExtractiveSummary};
pub use selector::SentenceSelector;
pub use variation::VariationDecorator;
