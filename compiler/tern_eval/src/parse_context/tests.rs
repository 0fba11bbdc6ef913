use super::*;
use pretty_assertions::assert_eq;
use tern_diagnostic::DiagnosticConfig;

#[test]
fn defaults_are_empty() {
    let registry = Registry::new();
    let logger = Logger::default();
    let parse = ParseContext::new(&registry, &logger);
    assert_eq!(parse.parse_mark(), 0);
    assert!(parse.loops().is_empty());
    assert!(parse.current_contexts().is_empty());
    assert!(parse.matches().is_empty());
    assert_eq!(parse.span(), Span::DUMMY);
    assert!(!parse.is_debug());
}

#[test]
fn builder_records_match_details() {
    let registry = Registry::new();
    let logger = Logger::default().with_debug(true);
    let loops = [LoopRef {
        id: LoopId::new(3),
        looped_type: ValueType::Integer,
    }];
    let parse = ParseContext::new(&registry, &logger)
        .with_contexts(&["main"])
        .with_loops(&loops)
        .with_element("loop-<.+>")
        .with_expression("loop-integer")
        .with_matches(vec!["integer".to_string()])
        .with_parse_mark(2)
        .with_span(Span::new(4, 16));

    assert_eq!(parse.current_contexts(), &["main"]);
    assert_eq!(parse.loops(), &loops);
    assert_eq!(parse.element(), "loop-<.+>");
    assert_eq!(parse.expression(), "loop-integer");
    assert_eq!(parse.matches(), &["integer".to_string()]);
    assert_eq!(parse.parse_mark(), 2);
    assert_eq!(parse.span(), Span::new(4, 16));
    assert!(parse.is_debug());
}

#[test]
fn error_reports_into_logger_with_span_label() {
    let registry = Registry::new();
    let logger = Logger::new(DiagnosticConfig::unlimited());
    let parse = ParseContext::new(&registry, &logger).with_span(Span::new(1, 5));

    let _proof = parse.error(ErrorCode::E3004, "Cannot loop a single value");

    assert_eq!(logger.error_count(), 1);
    let diags = logger.flush();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E3004);
    assert_eq!(diags[0].message, "Cannot loop a single value");
    assert_eq!(diags[0].primary_span(), Some(Span::new(1, 5)));
}
