//! Criterion benchmarks for lexica.
//!
//! Covers the three hot paths:
//! - Porter stemming of single words
//! - The English normalization pipeline
//! - Full corpus analysis (frequency table and the three law fits)

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexica::analysis::analyzer::EnglishAnalyzer;
use lexica::analysis::token_filter::stem::{PorterStemmer, Stemmer};
use lexica::config::AnalysisConfig;
use lexica::stats::{CorpusAnalyzer, FrequencyTable, analyze_benford, fit_zipf};

/// Generate a synthetic corpus body for benchmarking.
fn generate_test_corpus(lines: usize) -> String {
    let words = [
        "generalizations",
        "connected",
        "relational",
        "hopefulness",
        "caresses",
        "ponies",
        "motoring",
        "the",
        "and",
        "lord",
        "said",
        "unto",
        "children",
        "israel",
        "kingdom",
        "righteousness",
        "electrical",
        "adjustment",
        "formality",
        "sensitivity",
    ];

    let mut corpus = Vec::with_capacity(lines);
    for i in 0..lines {
        let line_length = 8 + (i % 12); // Variable length lines
        let line: Vec<&str> = (0..line_length)
            .map(|j| words[(i * 7 + j * 13 + i * j) % words.len()]) // Pseudo-random distribution
            .collect();
        corpus.push(line.join(" "));
    }

    corpus.join("\n")
}

/// Benchmark the Porter stemmer.
fn bench_stemming(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemming");

    let stemmer = PorterStemmer::new();
    let words = [
        "generalizations",
        "oscillators",
        "hopefulness",
        "controlling",
        "sky",
        "agreement",
    ];

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("porter_words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });

    let degenerate = "y".repeat(10_000);
    group.bench_function("porter_degenerate_y_run", |b| {
        b.iter(|| black_box(stemmer.stem(black_box(&degenerate))))
    });

    group.finish();
}

/// Benchmark the normalization pipeline.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let analyzer = EnglishAnalyzer::new().unwrap();
    let corpus = generate_test_corpus(1000);

    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("normalize_corpus", |b| {
        b.iter(|| {
            let count = analyzer.normalize(black_box(&corpus)).unwrap().count();
            black_box(count)
        })
    });

    group.bench_function("build_frequency_table", |b| {
        b.iter(|| {
            let table: FrequencyTable = analyzer.normalize(black_box(&corpus)).unwrap().collect();
            black_box(table)
        })
    });

    group.finish();
}

/// Benchmark the law analyzers and the full report.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    group.sample_size(20);

    let frequencies: Vec<u64> = (1..=10_000u64).map(|r| 100_000 / r + 1).collect();

    group.bench_function("fit_zipf_10k_ranks", |b| {
        b.iter(|| black_box(fit_zipf(black_box(&frequencies)).unwrap()))
    });

    group.bench_function("benford_10k_values", |b| {
        b.iter(|| black_box(analyze_benford(black_box(&frequencies), 10).unwrap()))
    });

    let analyzer = CorpusAnalyzer::new(AnalysisConfig::default()).unwrap();
    let corpus = generate_test_corpus(5000);
    group.bench_function("corpus_report", |b| {
        b.iter(|| black_box(analyzer.analyze_text("bench", black_box(&corpus)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_stemming, bench_normalization, bench_analysis);

criterion_main!(benches);
