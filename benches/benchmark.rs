//! Benchmarks for lexrank_scribe

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexrank_scribe::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future. The primary aim is to allow the computers to learn
automatically without human intervention or assistance and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to computer vision, speech recognition,
natural language processing, and drug design.

Natural language processing is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. Key applications include sentiment analysis, machine
translation, and text summarization.
"#;

fn benchmark_splitting(c: &mut Criterion) {
    let splitter = SentenceSplitter::new();

    c.bench_function("split_sample", |b| {
        b.iter(|| splitter.split(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("split_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_similarity(c: &mut Criterion) {
    let estimator = SimilarityEstimator::from_config(&SummarizerConfig::default());

    let mut group = c.benchmark_group("similarity_matrix");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        let sentences = SentenceSplitter::new().split(&text).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(sentences.len()),
            &sentences,
            |b, sentences| b.iter(|| estimator.estimate(black_box(sentences))),
        );
    }
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let sentences = SentenceSplitter::new()
        .split(&SAMPLE_TEXT.repeat(5))
        .unwrap();
    let matrix = SimilarityEstimator::from_config(&SummarizerConfig::default())
        .estimate(&sentences)
        .unwrap();
    let csr_graph = CsrGraph::from_similarity(&matrix, false, 0.0);

    c.bench_function("pagerank", |b| {
        b.iter(|| StandardPageRank::new().run(black_box(&csr_graph)))
    });

    let mut group = c.benchmark_group("pagerank_damping");
    for damping in [0.5, 0.85, 0.95].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(damping),
            damping,
            |b, &damping| {
                b.iter(|| {
                    StandardPageRank::new()
                        .with_damping(damping)
                        .run(black_box(&csr_graph))
                })
            },
        );
    }
    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let summarizer = ExtractiveSummarizer::new();
    let mut group = c.benchmark_group("full_pipeline");

    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("extractive", size), &text, |b, text| {
            b.iter(|| summarizer.summarize_with_count(black_box(text), 3))
        });

        group.bench_with_input(BenchmarkId::new("self_loops", size), &text, |b, text| {
            let summarizer =
                ExtractiveSummarizer::with_config(SummarizerConfig::default().with_self_loops(true))
                    .unwrap();
            b.iter(|| summarizer.summarize_with_count(black_box(text), 3))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_splitting,
    benchmark_similarity,
    benchmark_pagerank,
    benchmark_full_pipeline,
);
criterion_main!(benches);
