//! Search strategy benchmarks
//!
//! Compares linear scan and binary search on the example gene.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gene_search::{
    DEFAULT_ABSENT_KEY, DEFAULT_GENE, DEFAULT_PRESENT_KEY, binary_contains, decode,
    linear_contains,
};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(3))
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_default_gene", |b| {
        b.iter(|| decode(black_box(DEFAULT_GENE)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let gene = match decode(DEFAULT_GENE) {
        Ok(gene) => gene,
        Err(e) => panic!("default gene must decode: {}", e),
    };
    let sorted = gene.sorted();

    group.bench_function("linear_present", |b| {
        b.iter(|| linear_contains(gene.codons(), black_box(&DEFAULT_PRESENT_KEY)))
    });
    group.bench_function("linear_absent", |b| {
        b.iter(|| linear_contains(gene.codons(), black_box(&DEFAULT_ABSENT_KEY)))
    });
    group.bench_function("binary_present", |b| {
        b.iter(|| binary_contains(sorted.as_slice(), black_box(&DEFAULT_PRESENT_KEY)))
    });
    group.bench_function("binary_absent", |b| {
        b.iter(|| binary_contains(sorted.as_slice(), black_box(&DEFAULT_ABSENT_KEY)))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_decode, bench_search
}

criterion_main!(benches);
