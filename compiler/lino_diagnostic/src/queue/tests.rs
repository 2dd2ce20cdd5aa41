use super::*;
use pretty_assertions::assert_eq;

fn bad_char(column: u32) -> Diagnostic {
    let start = column - 1;
    Diagnostic::error(ErrorCode::E0001)
        .with_message(format!("bad character at {column}"))
        .with_label(Span::new(start, start + 1), column, 1, "here")
}

fn queue_with(error_limit: usize, deduplicate: bool) -> DiagnosticQueue {
    DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit,
        deduplicate,
    })
}

#[test]
fn test_default_config() {
    let config = DiagnosticConfig::default();
    assert_eq!(config.error_limit, 10);
    assert!(config.deduplicate);
}

#[test]
fn test_add_and_flush() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
    assert!(queue.add(bad_char(1)));
    assert!(queue.add(bad_char(4)));
    assert_eq!(queue.error_count(), 2);

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 2);
    assert_eq!(queue.error_count(), 0);
    assert!(queue.flush().is_empty());
}

#[test]
fn test_flush_sorts_by_column() {
    let mut queue = queue_with(0, false);
    queue.add(bad_char(7));
    queue.add(bad_char(2));
    queue.add(bad_char(5));

    let columns: Vec<u32> = queue.flush().iter().map(Diagnostic::primary_column).collect();
    assert_eq!(columns, vec![2, 5, 7]);
}

#[test]
fn test_error_limit() {
    let mut queue = queue_with(2, false);
    assert!(queue.add(bad_char(1)));
    assert!(!queue.limit_reached());
    assert!(queue.add(bad_char(2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(bad_char(3)));
    assert_eq!(queue.flush().len(), 2);
    assert!(!queue.limit_reached());
}

#[test]
fn test_zero_limit_never_reached() {
    let mut queue = queue_with(0, false);
    for column in 1..=50 {
        assert!(queue.add(bad_char(column)));
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.error_count(), 50);
}

#[test]
fn test_deduplicates_same_code_and_column() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
    assert!(queue.add(bad_char(3)));
    assert!(!queue.add(bad_char(3)));
    assert_eq!(queue.error_count(), 1);

    // Different code at the same column is kept.
    let other = Diagnostic::error(ErrorCode::E0002).with_label(Span::new(2, 3), 3, 1, "here");
    assert!(queue.add(other));
}

#[test]
fn test_dedup_disabled() {
    let mut queue = queue_with(0, false);
    assert!(queue.add(bad_char(3)));
    assert!(queue.add(bad_char(3)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_too_many_errors() {
    let diag = too_many_errors(10, Span::new(30, 31), 31);
    assert_eq!(diag.code, ErrorCode::E9001);
    assert_eq!(diag.message, "aborting line after 10 errors");
    assert_eq!(diag.primary_column(), 31);
    assert_eq!(diag.notes.len(), 1);
}
