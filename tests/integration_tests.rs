//! Integration tests for the logging facade and summarizer
//!
//! These tests verify:
//! - End-to-end continuation decisions through a logging context
//! - File output alongside the summarizer
//! - Log injection prevention
//! - Configuration errors
//! - Independence of contexts and summarizers

use rust_log_summarizer::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_warn_budget_and_fatal_end_to_end() {
    let config = SummarizerConfig::new()
        .threshold(LogLevel::Warn, 2)
        .halt_on_fatal(true);

    let context = LoggingContext::builder()
        .summarizer(config.clone())
        .build()
        .expect("context");
    let log = context.create_logger("pipeline");

    log.warn("first");
    assert!(context.can_continue());
    log.warn("second");
    assert!(!context.can_continue());

    let fresh = LoggingContext::builder()
        .summarizer(config)
        .build()
        .expect("context");
    fresh.create_logger("pipeline").fatal("source gone");
    assert!(!fresh.can_continue());
    assert_eq!(
        fresh.try_continue().unwrap_err().halt_reason(),
        Some(&HaltReason::FatalObserved)
    );
}

#[test]
fn test_batch_job_stops_at_error_budget() {
    let context = LoggingContext::builder()
        .summarizer(SummarizerConfig::new().threshold(LogLevel::Error, 3))
        .build()
        .expect("context");
    let log = context.create_logger("batch");

    let mut processed = 0;
    let mut halted = None;
    for item in 0..100 {
        if item % 10 == 9 {
            log.error_with("item failed", json!({ "item": item }));
        } else {
            log.success("item done");
        }
        processed += 1;
        if let Err(e) = context.try_continue() {
            halted = Some(e);
            break;
        }
    }

    let err = halted.expect("job should halt");
    assert!(err.is_policy_halt());
    assert_eq!(processed, 30);
    assert_eq!(
        err.to_string(),
        "Execution halted by summarizer policy: error count 3 reached threshold 3"
    );

    let counts = context.sum_log();
    assert_eq!(counts.get(LogLevel::Error), 3);
    assert_eq!(counts.get(LogLevel::Success), 27);
    assert_eq!(counts.total(), 30);
}

#[test]
fn test_file_sink_and_summarizer_together() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("job.log");

    let file_sink = FileSink::new(&log_file)
        .expect("Failed to create sink")
        .with_min_level(LogLevel::Warn)
        .with_timestamp_format(TimestampFormat::Utc);

    let context = LoggingContext::builder()
        .sink(file_sink)
        .summarizer(SummarizerConfig::permissive())
        .build()
        .expect("context");
    let log = context.create_logger("loader");

    log.info("starting")
        .warn_with("slow source", json!({ "ms": 1500 }))
        .debug("chunk read")
        .error("checksum mismatch");
    context.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "file sink filters below warn");
    assert!(lines[0].contains("WARN loader: slow source\t{\"ms\":1500}"));
    assert!(lines[1].contains("ERROR loader: checksum mismatch"));

    // The summarizer still saw every record
    let counts = context.sum_log();
    assert_eq!(counts.total(), 4);
    assert_eq!(counts.get(LogLevel::Info), 1);
    assert_eq!(counts.get(LogLevel::Debug), 1);
}

#[test]
fn test_log_injection_prevention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("injection_test.log");

    let context = LoggingContext::builder()
        .sink(FileSink::new(&log_file).expect("Failed to create sink"))
        .build()
        .expect("context");
    let log = context.create_logger("auth");

    log.info("User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation");
    context.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("\\n"));
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
}

#[test]
fn test_json_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("json.log");

    let context = LoggingContext::builder()
        .sink(
            FileSink::new(&log_file)
                .expect("Failed to create sink")
                .with_output_format(OutputFormat::Json)
                .with_min_level(LogLevel::Trace),
        )
        .build()
        .expect("context");

    context
        .create_logger("api")
        .trace_with("request", json!({ "path": "/health" }));
    context.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let value: serde_json::Value =
        serde_json::from_str(content.trim()).expect("line is valid JSON");
    assert_eq!(value["level"], "trace");
    assert_eq!(value["module"], "api");
    assert_eq!(value["params"]["path"], "/health");
}

#[test]
fn test_no_summarizer_queries() {
    let context = LoggingContext::builder()
        .sink(ConsoleSink::with_colors(false).with_min_level(LogLevel::Fatal))
        .build()
        .expect("context");
    let log = context.create_logger("plain");

    for _ in 0..5 {
        log.fatal("still going");
    }
    assert!(context.sum_log().is_empty());
    assert!(context.can_continue());
    assert!(context.try_continue().is_ok());
}

#[test]
fn test_late_summarizer_registration() {
    let context = std::sync::Arc::new(LoggingContext::new());
    let log = context.create_logger("late");

    log.error("before summarizer");
    let summarizer = context
        .setup_summarizer(SummarizerConfig::new().threshold(LogLevel::Error, 1))
        .expect("first summarizer");
    assert!(summarizer.can_continue(), "earlier records are not replayed");

    log.error("after summarizer");
    assert!(!context.can_continue());
}

#[test]
fn test_summarizer_from_json_configuration() {
    let config = SummarizerConfig::from_json(
        r#"{ "thresholds": { "warn": 2, "error": 1 }, "haltOnFatal": false }"#,
    )
    .expect("valid config");

    let context = LoggingContext::builder()
        .summarizer(config)
        .build()
        .expect("context");
    let log = context.create_logger("cfg");

    log.fatal("ignored by policy");
    assert!(context.can_continue());
    log.warn("one");
    assert!(context.can_continue());
    log.error("one");
    assert!(!context.can_continue());
}

#[test]
fn test_invalid_summarizer_configuration() {
    let err = SummarizerConfig::from_json(r#"{ "thresholds": { "critical": 1 } }"#).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    let err = SummarizerConfig::from_json(r#"{ "thresholds": { "error": -3 } }"#).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    let err = Summarizer::from_value(json!({ "thresholds": "error=3" })).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_contexts_are_independent() {
    let first = LoggingContext::builder()
        .summarizer(SummarizerConfig::new())
        .build()
        .expect("context");
    let second = LoggingContext::builder()
        .summarizer(SummarizerConfig::new())
        .build()
        .expect("context");

    first.create_logger("a").fatal("down");
    assert!(!first.can_continue());
    assert!(second.can_continue());
    assert!(second.sum_log().is_empty());
}

#[test]
fn test_custom_format_fn_on_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("custom.log");

    let context = LoggingContext::builder()
        .sink(
            FileSink::new(&log_file)
                .expect("Failed to create sink")
                .with_format_fn(std::sync::Arc::new(|entry: &LogEntry| {
                    format!("{}:{}:{}", entry.level.name(), entry.module, entry.message)
                })),
        )
        .build()
        .expect("context");

    context.create_logger("fmt").success("all rows imported");
    context.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "success:fmt:all rows imported\n");
}
