//! Unit tests for the Engine logging host
//!
//! IMPORTANT: LOGGER is a global OnceLock shared across all tests.
//! Tests that swap the logger are marked with #[serial] and only
//! inspect entries from their own source string, since unrelated tests
//! running in parallel may log through the same logger.

use crate::frustum3d::{Engine, Error, Result};
use crate::frustum3d::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn entries_from(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.source == source)
        .cloned()
        .collect()
}

// ============================================================================
// LOGGER SWAP TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "test::engine_swap", "hello".to_string());
    Engine::log(LogSeverity::Warn, "test::engine_swap", "careful".to_string());

    let captured = entries_from(&entries, "test::engine_swap");
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "test::engine_detailed",
        "boom".to_string(),
        "frustum.rs",
        99,
    );

    let captured = entries_from(&entries, "test::engine_detailed");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("frustum.rs"));
    assert_eq!(captured[0].line, Some(99));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::reset_logger();

    Engine::log(LogSeverity::Info, "test::engine_reset", "not captured".to_string());

    assert!(entries_from(&entries, "test::engine_reset").is_empty());
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_level_macros_route_through_engine() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    crate::engine_trace!("test::engine_macros", "t {}", 1);
    crate::engine_debug!("test::engine_macros", "d {}", 2);
    crate::engine_info!("test::engine_macros", "i {}", 3);
    crate::engine_warn!("test::engine_macros", "w {}", 4);
    crate::engine_error!("test::engine_macros", "e {}", 5);

    let captured = entries_from(&entries, "test::engine_macros");
    let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ]);
    assert_eq!(captured[4].message, "e 5");
    assert!(captured[4].line.is_some());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_err_logs_and_builds_error() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let err = crate::engine_err!("test::engine_err", "model {} missing", 7);

    assert_eq!(err, Error::InvalidResource("model 7 missing".to_string()));
    let captured = entries_from(&entries, "test::engine_err");
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_returns_early() {
    fn check(depth: f32) -> Result<f32> {
        if depth <= 0.0 {
            crate::engine_bail!("test::engine_bail", "depth {} must be positive", depth);
        }
        Ok(depth)
    }

    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    assert_eq!(check(10.0), Ok(10.0));
    assert_eq!(
        check(-1.0),
        Err(Error::InvalidConfig("depth -1 must be positive".to_string()))
    );
    assert_eq!(entries_from(&entries, "test::engine_bail").len(), 1);

    Engine::reset_logger();
}
