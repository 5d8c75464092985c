//! Sentence segmentation
//!
//! UAX #29 sentence boundaries, followed by a repair pass that glues a
//! segment to its successor when the segment ends in an abbreviation or a
//! capital initial that the next word shows to be mid-sentence, or when it
//! was cut at a single line break with no terminal punctuation
//! (hard-wrapped text).

use crate::errors::{Result, SummarizeError};
use crate::types::Sentence;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Titles that precede a name and never end a sentence.
/// Stored lowercase, without the final period.
const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "mt", "rev", "gen", "col", "lt", "sgt", "capt", "gov",
    "sen", "rep", "hon",
];

/// Abbreviations that continue the sentence only when the next word
/// starts lowercase or with a digit ("No. 5", "Jan. 3", "e.g. cats").
const CONTEXTUAL_ABBREVIATIONS: &[&str] = &[
    "sr", "jr", "vs", "etc", "e.g", "i.e", "cf", "al", "approx", "dept", "est", "fig", "inc",
    "ltd", "co", "corp", "no", "vol", "pp", "ed", "u.s", "u.k", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Capitalized words that open a new sentence after a capital initial
/// ("vitamin C. It helps.").
const SENTENCE_STARTERS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "for", "he", "her", "his", "how", "i", "if", "in", "it",
    "its", "my", "no", "on", "our", "she", "so", "that", "the", "their", "then", "there",
    "these", "they", "this", "those", "we", "what", "when", "where", "which", "who", "why",
    "yet", "you",
];

const TERMINALS: &[char] = &['.', '!', '?', '\u{2026}', '\u{3002}', '\u{FF01}', '\u{FF1F}'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201D}', '\u{2019}', '\u{00BB}'];

/// Splits a document into an ordered sequence of sentences
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    /// Always glued to the next segment
    abbreviations: FxHashSet<String>,
    /// Glued only before a lowercase or numeric word
    contextual: FxHashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    /// Create a splitter with the built-in English abbreviation lists
    pub fn new() -> Self {
        Self {
            abbreviations: TITLE_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
            contextual: CONTEXTUAL_ABBREVIATIONS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }

    /// Add abbreviations (with or without the trailing period)
    ///
    /// Added words never end a sentence, whatever follows them.
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        for word in words {
            let word = word.trim_end_matches('.').to_lowercase();
            self.contextual.remove(&word);
            self.abbreviations.insert(word);
        }
        self
    }

    /// Split text into sentences
    ///
    /// Sentence text is the document text between the boundaries with
    /// surrounding whitespace removed; nothing inside is altered.
    pub fn split(&self, text: &str) -> Result<Vec<Sentence>> {
        if text.trim().is_empty() {
            return Err(SummarizeError::invalid_input(
                "text must contain at least one non-whitespace character",
            ));
        }

        let sentences = self
            .sentence_boundaries(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| Sentence::new(&text[start..end], start, end, index))
            .collect();

        Ok(sentences)
    }

    /// Find trimmed sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries: Vec<(usize, usize)> = Vec::new();
        let mut pending: Option<(usize, usize)> = None;

        for (idx, segment) in text.split_sentence_bound_indices() {
            if segment.trim().is_empty() {
                continue;
            }

            let (start, end) = match pending.take() {
                Some((start, _)) => (start, idx + segment.len()),
                None => (idx, idx + segment.len()),
            };

            if self.continues_past_period(text, start, end) || is_soft_wrap(text, start, end) {
                pending = Some((start, end));
            } else {
                boundaries.push((start, end));
            }
        }

        // A document may end on an abbreviation
        if let Some(span) = pending {
            boundaries.push(span);
        }

        boundaries
            .into_iter()
            .map(|(start, end)| trim_span(text, start, end))
            .collect()
    }

    /// Check whether the period ending `text[start..end]` belongs to an
    /// abbreviation or initial rather than closing the sentence
    fn continues_past_period(&self, text: &str, start: usize, end: usize) -> bool {
        let trimmed = text[start..end].trim_end();
        if !trimmed.ends_with('.') {
            return false;
        }

        let last_word = match trimmed.split_whitespace().last() {
            Some(word) => word,
            None => return false,
        };
        let word = last_word
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .trim_end_matches('.');

        let next = match next_word(&text[end..]) {
            Some(next) => next,
            None => return false,
        };
        let key = word.to_lowercase();

        if self.abbreviations.contains(&key) {
            return true;
        }
        if self.contextual.contains(&key) {
            return starts_mid_sentence(next);
        }

        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(first), None) if first.is_uppercase() => {
                starts_mid_sentence(next)
                    || !SENTENCE_STARTERS.contains(&next.to_lowercase().as_str())
            }
            _ => false,
        }
    }
}

/// First word after a boundary, stripped of surrounding punctuation
fn next_word(rest: &str) -> Option<&str> {
    rest.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|w| !w.is_empty())
}

fn starts_mid_sentence(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_lowercase() || c.is_numeric())
}

/// A segment cut at one line break without terminal punctuation
///
/// Blank lines still separate sentences, so headings and list items
/// stay on their own.
fn is_soft_wrap(text: &str, start: usize, end: usize) -> bool {
    let content = text[start..end].trim_end();
    if content.trim_end_matches(CLOSERS).ends_with(TERMINALS) {
        return false;
    }

    let rest = &text[start + content.len()..];
    let after = rest.trim_start();
    if after.is_empty() {
        return false;
    }

    let gap = &rest[..rest.len() - after.len()];
    gap.matches('\n').count() == 1
}

fn trim_span(text: &str, start: usize, end: usize) -> (usize, usize) {
    let span = &text[start..end];
    let leading = span.len() - span.trim_start().len();
    let trailing = span.len() - span.trim_end().len();
    (start + leading, end - trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let splitter = SentenceSplitter::new();
        let sentences = splitter
            .split("Cats are mammals. Cats have fur. The sky is blue.")
            .unwrap();

        assert_eq!(
            texts(&sentences),
            vec!["Cats are mammals.", "Cats have fur.", "The sky is blue."]
        );
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
        }
    }

    #[test]
    fn test_single_sentence() {
        let sentences = SentenceSplitter::new().split("Hello world.").unwrap();
        assert_eq!(texts(&sentences), vec!["Hello world."]);
    }

    #[test]
    fn test_offsets_point_at_verbatim_text() {
        let text = "  First point here!   Second point?\n\nThird, without a period";
        let sentences = SentenceSplitter::new().split(text).unwrap();

        assert_eq!(sentences.len(), 3);
        for sentence in &sentences {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
        assert_eq!(sentences[2].text, "Third, without a period");
    }

    #[test]
    fn test_title_abbreviation_is_not_a_boundary() {
        let sentences = SentenceSplitter::new()
            .split("Dr. Smith went to Washington. He arrived late.")
            .unwrap();

        assert_eq!(
            texts(&sentences),
            vec!["Dr. Smith went to Washington.", "He arrived late."]
        );
    }

    #[test]
    fn test_initials_are_not_boundaries() {
        let sentences = SentenceSplitter::new()
            .split("The novel was written by J. R. Tolkien. It is long.")
            .unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "The novel was written by J. R. Tolkien.");
    }

    #[test]
    fn test_quotation_closes_sentence() {
        let sentences = SentenceSplitter::new()
            .split("She said \"Stop.\" Then she left.")
            .unwrap();

        assert_eq!(texts(&sentences), vec!["She said \"Stop.\"", "Then she left."]);
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = SentenceSplitter::new()
            .split("Is it ready? Yes! Ship it.")
            .unwrap();
        assert_eq!(texts(&sentences), vec!["Is it ready?", "Yes!", "Ship it."]);
    }

    #[test]
    fn test_custom_abbreviation() {
        let text = "Ask the Acme Intl. Office today. They know.";
        let default_split = SentenceSplitter::new().split(text).unwrap();
        assert_eq!(default_split.len(), 3);

        let custom = SentenceSplitter::new()
            .with_abbreviations(&["Intl."])
            .split(text)
            .unwrap();
        assert_eq!(custom.len(), 2);
    }

    #[test]
    fn test_abbreviation_before_capital_ends_sentence() {
        let sentences = SentenceSplitter::new()
            .split("Is it true? The answer is no. Cats are mammals.")
            .unwrap();
        assert_eq!(
            texts(&sentences),
            vec!["Is it true?", "The answer is no.", "Cats are mammals."]
        );

        let sentences = SentenceSplitter::new()
            .split("The play was staged by Ed. He liked it.")
            .unwrap();
        assert_eq!(
            texts(&sentences),
            vec!["The play was staged by Ed.", "He liked it."]
        );
    }

    #[test]
    fn test_abbreviation_before_number_continues() {
        let sentences = SentenceSplitter::new()
            .split("It appeared in Vol. 3 Issue 2. Readers loved it.")
            .unwrap();
        assert_eq!(
            texts(&sentences),
            vec!["It appeared in Vol. 3 Issue 2.", "Readers loved it."]
        );
    }

    #[test]
    fn test_initial_before_sentence_starter_ends_sentence() {
        let sentences = SentenceSplitter::new()
            .split("Take vitamin C. It helps.")
            .unwrap();
        assert_eq!(texts(&sentences), vec!["Take vitamin C.", "It helps."]);
    }

    #[test]
    fn test_trailing_abbreviation_kept() {
        let sentences = SentenceSplitter::new()
            .split("We met Dr.")
            .unwrap();
        assert_eq!(texts(&sentences), vec!["We met Dr."]);
    }

    #[test]
    fn test_hard_wrapped_lines_are_joined() {
        let text = "Machine learning is a subset of\nartificial intelligence. It learns\nfrom data.";
        let sentences = SentenceSplitter::new().split(text).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(
            sentences[0].text,
            "Machine learning is a subset of\nartificial intelligence."
        );
        assert_eq!(sentences[1].text, "It learns\nfrom data.");
    }

    #[test]
    fn test_blank_line_separates_unpunctuated_heading() {
        let sentences = SentenceSplitter::new()
            .split("Introduction\n\nCats are mammals.")
            .unwrap();
        assert_eq!(texts(&sentences), vec!["Introduction", "Cats are mammals."]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let splitter = SentenceSplitter::new();
        assert!(splitter.split("").unwrap_err().is_invalid_input());
        assert!(splitter.split("   \n\t ").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_split_is_restartable() {
        let splitter = SentenceSplitter::new();
        let text = "One idea. Another idea.";
        assert_eq!(splitter.split(text).unwrap(), splitter.split(text).unwrap());
    }
}
