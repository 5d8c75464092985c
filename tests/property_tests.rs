//! Property-based tests using proptest

use lexrank_scribe::*;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "cats", "dogs", "rivers", "mountains", "engines", "gardens", "music", "planets", "rust",
    "compilers", "forests", "oceans", "storms", "bridges", "markets", "lanterns",
];

/// A sentence of 2-6 content words, capitalized and ending in a period
fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 2..7).prop_map(|words| {
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    })
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence_strategy(), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_pagerank_scores_sum_to_one(
        nodes in 2usize..20,
        edge_prob in 0.1f64..0.5
    ) {
        let mut builder = graph::builder::GraphBuilder::new(nodes);

        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if rand::random::<f64>() < edge_prob {
                    builder.add_edge(i as u32, j as u32, rand::random::<f64>() + 0.01);
                }
            }
        }

        let graph = CsrGraph::from_builder(&builder);
        let result = StandardPageRank::new().with_max_iterations(200).run(&graph);

        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "Scores sum to {} instead of 1", sum);
        prop_assert!(result.scores.iter().all(|s| *s >= 0.0));
    }

    #[test]
    fn test_edgeless_graph_is_uniform(nodes in 1usize..50) {
        let graph = CsrGraph::from_builder(&graph::builder::GraphBuilder::new(nodes));
        let result = StandardPageRank::new().run(&graph);

        for score in &result.scores {
            prop_assert!((score - 1.0 / nodes as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_similarity_matrix_is_symmetric_and_bounded(doc in document_strategy()) {
        let estimator = SimilarityEstimator::from_config(&SummarizerConfig::default());
        let matrix = estimator.estimate_texts(&doc).unwrap();

        for i in 0..doc.len() {
            prop_assert!((matrix.get(i, i) - 1.0).abs() < 1e-12);
            for j in 0..doc.len() {
                let s = matrix.get(i, j);
                prop_assert!((0.0..=1.0).contains(&s));
                prop_assert_eq!(s, matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_summary_sentences_are_document_substrings(
        doc in document_strategy(),
        count in 1usize..5
    ) {
        let text = doc.join(" ");
        let summary = ExtractiveSummarizer::new().summarize_detailed(&text, count).unwrap();

        prop_assert!(summary.sentences.len() <= count);
        for sentence in &summary.sentences {
            prop_assert_eq!(&text[sentence.start..sentence.end], sentence.text.as_str());
        }
    }

    #[test]
    fn test_summary_is_deterministic(doc in document_strategy(), count in 1usize..5) {
        let text = doc.join(" ");
        let summarizer = ExtractiveSummarizer::new();

        let first = summarizer.summarize_with_count(&text, count).unwrap();
        let second = summarizer.summarize_with_count(&text, count).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_large_count_returns_every_sentence(doc in document_strategy()) {
        let text = doc.join(" ");
        let summary = ExtractiveSummarizer::new()
            .summarize_detailed(&text, doc.len() + 3)
            .unwrap();

        prop_assert_eq!(summary.sentences.len(), summary.ranking.scores.len());

        let mut indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
        indices.sort_unstable();
        let expected: Vec<usize> = (0..summary.ranking.scores.len()).collect();
        prop_assert_eq!(indices, expected);

        for pair in summary.sentences.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ranking_scores_sum_to_one(doc in document_strategy()) {
        let text = doc.join(" ");
        let summary = ExtractiveSummarizer::new().summarize_detailed(&text, 1).unwrap();

        let sum: f64 = summary.ranking.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_splitter_never_panics(text in "\\PC{0,200}") {
        let splitter = SentenceSplitter::new();
        match splitter.split(&text) {
            Ok(sentences) => {
                for s in &sentences {
                    prop_assert_eq!(&text[s.start..s.end], s.text.as_str());
                    prop_assert!(!s.text.trim().is_empty());
                }
            }
            Err(e) => prop_assert!(e.is_invalid_input()),
        }
    }
}
