//! Benchmarks for wrapping and measurement.
//!
//! Run with: cargo bench -p modalert-text --bench measure_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use modalert_style::{Font, FontWeight};
use modalert_text::{MeasureOptions, measure, wrap};
use std::hint::black_box;

const PARAGRAPH: &str = "Your changes have been saved. You can keep editing, or close this \
    window and come back later; drafts are kept on this device until you publish them.";

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    for repeat in [1usize, 8, 64] {
        let text = vec![PARAGRAPH; repeat].join("\n");
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("columns_40", repeat), &text, |b, text| {
            b.iter(|| black_box(wrap(text, 40)))
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let font = Font::system(16.0, FontWeight::Regular);
    let mut group = c.benchmark_group("measure");
    for repeat in [1usize, 8, 64] {
        let text = vec![PARAGRAPH; repeat].join("\n");
        group.bench_with_input(BenchmarkId::new("clamped", repeat), &text, |b, text| {
            let opts = MeasureOptions::new().max_height(274.0);
            b.iter(|| black_box(measure(text, &font, 254.0, &opts)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wrap, bench_measure);
criterion_main!(benches);
