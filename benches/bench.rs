//! Criterion benchmarks for boolsearch.
//!
//! Covers the hot paths of the engine:
//! - Tokenization of document text
//! - Building and merging partial indices
//! - Sharded parallel builds
//! - Conjunctive, disjunctive and wildcard query evaluation

use std::hint::black_box;

use boolsearch::analysis::Tokenizer;
use boolsearch::parallel_index::MergeStrategy;
use boolsearch::prelude::*;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "cocoa", "coffee", "copper", "corn", "cotton", "crude", "oil", "grain", "wheat", "gold",
        "silver", "sugar", "ship", "shipping", "trade", "trader", "trading", "bank", "banks",
        "rate", "rates", "interest", "money", "earnings", "acquisition", "merger", "shares",
        "dividend", "profit", "loss", "quarter", "export",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

fn generate_id_terms(count: usize) -> IdTerms {
    let tokenizer = Tokenizer::default();
    generate_test_documents(count)
        .iter()
        .enumerate()
        .map(|(i, text)| (i as DocId, tokenizer.terms(text)))
        .collect()
}

/// Benchmark tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let tokenizer = Tokenizer::default();
    let texts = generate_test_documents(100);

    group.throughput(Throughput::Elements(100));
    group.bench_function("tokenize_batch_documents", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(tokenizer.terms(black_box(text)));
            }
        })
    });

    group.finish();
}

/// Benchmark index construction.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(20);

    let id_terms = generate_id_terms(2000);
    group.throughput(Throughput::Elements(id_terms.len() as u64));

    group.bench_function("single_shard", |b| {
        b.iter(|| black_box(build_partial_indices(black_box(&id_terms)).unwrap()))
    });

    for strategy in [MergeStrategy::Sequential, MergeStrategy::Tree] {
        let engine = ParallelIndexEngine::new(
            ParallelIndexConfig::default()
                .with_shard_count(8)
                .with_merge_strategy(strategy),
        )
        .unwrap();

        group.bench_function(format!("sharded_{strategy:?}").to_lowercase(), |b| {
            b.iter_with_setup(
                || id_terms.clone(),
                |corpus| black_box(engine.build(corpus).unwrap()),
            )
        });
    }

    group.finish();
}

/// Benchmark query evaluation.
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let indices = build_partial_indices(&generate_id_terms(5000)).unwrap();
    let evaluator = QueryEvaluator::from_indices(&indices);

    let queries = [
        ("conjunctive", "cocoa AND trade AND rates", QueryType::Conjunctive),
        ("disjunctive", "gold OR silver OR copper", QueryType::Disjunctive),
        ("wildcard_prefix", "tr*", QueryType::Wildcard),
        ("wildcard_infix", "s*g", QueryType::Wildcard),
    ];

    for (name, query, query_type) in queries {
        group.bench_function(name, |b| {
            b.iter(|| black_box(evaluator.evaluate(black_box(query), query_type).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_index_build, bench_queries);

criterion_main!(benches);
