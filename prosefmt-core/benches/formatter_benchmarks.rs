//! Throughput benchmarks for SentenceFormatter
//!
//! Run with: cargo bench --bench formatter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prosefmt_core::{wordlists, SentenceFormatter};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "the URGENT meeting with john smith is at google. did Dr. Jones see the U.S. report? ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let formatter = SentenceFormatter::new(wordlists::builtin().unwrap());

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("format", size), &text, |b, text| {
            b.iter(|| formatter.format(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes);
criterion_main!(benches);
