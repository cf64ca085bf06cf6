//! Benchmarks for plaque mesh generation.
//!
//! Run with: cargo bench -p plaque-mesh
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p plaque-mesh -- --save-baseline main
//! 2. After changes: cargo bench -p plaque-mesh -- --baseline main

use braille_translate::to_braille;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plaque_mesh::{build_plaque, PlaqueParams};

/// A paragraph of mixed text, the realistic upper end for a plaque.
fn paragraph() -> String {
    let mut text = String::new();
    for _ in 0..6 {
        text.push_str("The Quick Brown Fox jumps over 1234 lazy dogs!\n");
    }
    text
}

fn bench_build_plaque(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_plaque");

    for (name, text) in [
        ("word", "braille".to_string()),
        ("line", "The quick brown fox, 2025!".to_string()),
        ("paragraph", paragraph()),
    ] {
        let braille = to_braille(&text);
        group.throughput(Throughput::Elements(braille.chars().count() as u64));
        group.bench_function(name, |b| {
            b.iter(|| build_plaque(black_box(&braille), &PlaqueParams::default()));
        });
    }

    group.finish();
}

fn bench_segment_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");
    let braille = to_braille("Tessellation 8-64");

    for segments in [8usize, 24, 64] {
        let params = PlaqueParams::default().with_segments(segments);
        group.bench_function(BenchmarkId::from_parameter(segments), |b| {
            b.iter(|| build_plaque(black_box(&braille), &params));
        });
    }

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let text = paragraph();
    c.bench_function("translate_paragraph", |b| {
        b.iter(|| braille_translate::translate(black_box(&text)));
    });
}

criterion_group!(
    benches,
    bench_build_plaque,
    bench_segment_counts,
    bench_translate
);
criterion_main!(benches);
