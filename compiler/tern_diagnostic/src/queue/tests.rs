use super::*;
use pretty_assertions::assert_eq;

fn error(message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E3001).with_message(message)
}

#[test]
fn emit_error_counts_and_proves() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());

    let _proof = queue.emit_error(error("first"));
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors().is_some());
}

#[test]
fn duplicates_are_dropped() {
    let mut queue = DiagnosticQueue::new();
    let _ = queue.emit_error(error("same"));
    let _ = queue.emit_error(error("same"));
    let _ = queue.emit_error(error("different"));
    assert_eq!(queue.error_count(), 2);

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["same".to_string(), "different".to_string()]);
}

#[test]
fn unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let _ = queue.emit_error(error("same"));
    let _ = queue.emit_error(error("same"));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.flush().len(), 2);
}

#[test]
fn limit_appends_too_many_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    for i in 0..4 {
        let _ = queue.emit_error(error(&format!("error {i}")));
    }
    assert!(queue.limit_reached());

    let flushed = queue.flush();
    let messages: Vec<_> = flushed.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["error 0", "error 1", "aborting due to 2 previous errors"]
    );
    assert_eq!(queue.error_count(), 0);
}
