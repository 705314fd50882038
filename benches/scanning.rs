//! Performance benchmarks for rstscan
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rstscan::{BlockEvent, BlockScanner, HtmlWriter};

/// Sample documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, world!";

    pub const SMALL: &str = "A short paragraph\nover two lines.\n\n    An indented quote.\n";

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = "Section title
============

This paragraph runs over a few lines of
ordinary text.\tIt has a tab and some
trailing spaces   

    A blockquote that spans
    multiple lines.

  .. note:: Directives are scanned as plain blocks.

* list markers too
";
        section.repeat(200)
    }

    /// Alternating indentation on every line
    pub fn staircase() -> String {
        (0..2000)
            .map(|i| format!("{}line {i}\n", " ".repeat(i % 7)))
            .collect()
    }

    /// Long lines dense with tabs
    pub fn tabs() -> String {
        "a\tbb\tccc\tdddd\t".repeat(5000)
    }
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| rstscan::to_html(black_box(samples::TINY)))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| rstscan::to_html(black_box(samples::SMALL)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| rstscan::to_html(black_box(&large)))
    });

    group.bench_function("large_events", |b| {
        b.iter(|| {
            let mut events: Vec<BlockEvent> = Vec::with_capacity(1024);
            let Ok(()) = BlockScanner::new(black_box(&large)).scan(&mut events);
            events
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let staircase = samples::staircase();
    group.throughput(Throughput::Bytes(staircase.len() as u64));
    group.bench_function("staircase", |b| {
        b.iter(|| rstscan::to_html(black_box(&staircase)))
    });

    let tabs = samples::tabs();
    group.throughput(Throughput::Bytes(tabs.len() as u64));
    group.bench_function("tabs", |b| {
        b.iter(|| rstscan::to_html(black_box(&tabs)))
    });

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let input = samples::large();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("without_reuse", |b| {
        b.iter(|| rstscan::to_html(black_box(&input)))
    });

    group.bench_function("with_reuse", |b| {
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        b.iter(|| {
            writer.clear();
            let Ok(()) = BlockScanner::new(black_box(&input)).scan(&mut writer);
            black_box(writer.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_scanning, bench_pathological, bench_buffer_reuse);
criterion_main!(benches);
