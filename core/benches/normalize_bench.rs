use criterion::{criterion_group, criterion_main, Criterion};
use search_core::normalizer::{normalize, NormalizationMode};
use search_core::{Corpus, Document, SearchEngine};

const TEXT: &str = "Dear customer, your PayPal account has been suspended because we noticed \
    unusual activity. Please confirm your identity within 24 hours by clicking the link below, \
    otherwise your account will be permanently limited. Thank you for choosing our services.";

fn corpus(n: usize) -> Corpus {
    Corpus::from_documents((0..n).map(|i| Document::new(format!("{i}.txt"), TEXT.repeat(1 + i % 5))))
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_general", |b| b.iter(|| normalize(TEXT, NormalizationMode::General)));
    c.bench_function("normalize_verb", |b| b.iter(|| normalize(TEXT, NormalizationMode::VerbPreferring)));
}

fn bench_build(c: &mut Criterion) {
    let docs = corpus(100);
    c.bench_function("build_engine_100_docs", |b| b.iter(|| SearchEngine::build(docs.clone())));
}

criterion_group!(benches, bench_normalize, bench_build);
criterion_main!(benches);
