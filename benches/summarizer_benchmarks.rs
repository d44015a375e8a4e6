//! Criterion benchmarks for rust_log_summarizer

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_log_summarizer::prelude::*;
use std::sync::Arc;

// ============================================================================
// Summarizer Benchmarks
// ============================================================================

fn bench_summarizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarizer");
    group.throughput(Throughput::Elements(1));

    let summarizer = Summarizer::with_config(
        SummarizerConfig::new()
            .threshold(LogLevel::Warn, u64::MAX)
            .threshold(LogLevel::Error, u64::MAX),
    );
    let entry = LogEntry::new(LogLevel::Error, "bench", "Error message");

    group.bench_function("observe", |b| {
        b.iter(|| summarizer.observe(black_box(&entry)));
    });

    group.bench_function("can_continue", |b| {
        b.iter(|| black_box(summarizer.can_continue()));
    });

    group.bench_function("counts", |b| {
        b.iter(|| black_box(summarizer.counts()));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let context = Arc::new(LoggingContext::new());
    let log = context.create_logger("bench");
    group.bench_function("no_sinks", |b| {
        b.iter(|| {
            log.info(black_box("Info message"));
        });
    });

    let context = LoggingContext::builder()
        .summarizer(SummarizerConfig::permissive())
        .build()
        .expect("context");
    let log = context.create_logger("bench");
    group.bench_function("summarizer_only", |b| {
        b.iter(|| {
            log.warn(black_box("Warn message"));
        });
    });

    group.bench_function("summarizer_with_params", |b| {
        b.iter(|| {
            log.error_with(
                black_box("Error message"),
                serde_json::json!({ "row": 42, "reason": "checksum" }),
            );
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let entry = LogEntry::new(LogLevel::Warn, "bench", "Formatted message")
        .with_params(serde_json::json!({ "attempt": 3 }));

    let text = RecordFormatter::new();
    group.bench_function("text", |b| {
        b.iter(|| black_box(text.format(&entry)));
    });

    let json = RecordFormatter::new().with_output_format(OutputFormat::Json);
    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(&entry)));
    });

    group.finish();
}

criterion_group!(benches, bench_summarizer, bench_dispatch, bench_formatting);
criterion_main!(benches);
