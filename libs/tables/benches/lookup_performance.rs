//! Lookup performance for the classification store
//!
//! Every character of every label goes through `class_of`, so these
//! numbers bound the per-code-point cost of label validation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use idna_tables::{pack_u32, CodepointLookup, IdnaTables, PackedIntSet, Script};

/// Benchmark raw membership on a large packed set
fn bench_packed_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_membership");

    let packed = pack_u32((0..200_000u32).step_by(3));
    let set = PackedIntSet::new(&packed).expect("aligned buffer");

    group.bench_function("contains_hit", |b| {
        b.iter(|| black_box(set.contains_u32(black_box(99_999))));
    });

    group.bench_function("contains_miss", |b| {
        b.iter(|| black_box(set.contains_u32(black_box(100_000))));
    });

    group.finish();
}

/// Benchmark classification of ASCII, CJK and disallowed code points
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let tables = IdnaTables::shared();
    let label: Vec<char> = "bücher测试テストexample".chars().collect();

    group.bench_function("class_of_label", |b| {
        b.iter(|| {
            for cp in &label {
                black_box(tables.class_of(black_box(*cp)));
            }
        });
    });

    group.bench_function("in_script_greek", |b| {
        b.iter(|| black_box(tables.in_script(black_box('\u{03B1}'), Script::Greek)));
    });

    group.bench_function("joining_type_arabic", |b| {
        b.iter(|| black_box(tables.joining_type(black_box('\u{0628}'))));
    });

    group.finish();
}

/// Benchmark building the tables from scratch
fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");
    group.sample_size(10);

    group.bench_function("load", |b| {
        b.iter(|| black_box(IdnaTables::load()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_packed_membership,
    bench_classification,
    bench_table_build
);
criterion_main!(benches);
