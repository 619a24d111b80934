use fred::{parse, parse_slice, parse_with_options, Error, ParseOptions, Rule};

#[test]
fn test_two_independent_violations_are_both_reported() {
    let err = parse("{a 1 b: 2 c 3}").unwrap_err();
    assert_eq!(err.len(), 2);

    let err = parse("[1 : 2] extra").unwrap_err();
    assert!(err.len() >= 2);
}

#[test]
fn test_errors_across_nested_containers() {
    let source = "{\n  a: [1 2 :]\n  b: {c 1}\n  d: 2021-05-01T\n}";
    let err = parse(source).unwrap_err();
    let lines: Vec<usize> = err.errors().iter().map(Error::line).collect();
    assert_eq!(lines, vec![2, 3, 5]);
}

#[test]
fn test_syntax_error_fields() {
    let err = parse("[1 2 }").unwrap_err();
    assert_eq!(err.len(), 1);
    match &err.errors()[0] {
        Error::Syntax {
            offset,
            line,
            col,
            rule,
            expected,
            found,
        } => {
            assert_eq!(*offset, 5);
            assert_eq!((*line, *col), (1, 6));
            assert_eq!(*rule, Rule::Array);
            assert_eq!(expected, "`]`");
            assert_eq!(found, "`}`");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_lex_errors_accumulate() {
    let err = parse("[1 `` 2] \"").unwrap_err();
    assert!(err.errors().iter().all(Error::is_lex));
    let offsets: Vec<usize> = err.errors().iter().map(Error::offset).collect();
    assert_eq!(offsets, vec![3, 4, 9]);
    assert!(matches!(err.errors()[0], Error::Lex { found: '`', .. }));
    assert!(matches!(err.errors()[2], Error::Lex { found: '"', .. }));
}

#[test]
fn test_dashes_are_identifier_characters() {
    // a lone or leading dash is a name, not an unexpected character
    let err = parse("[1 - 2]").unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.errors()[0].is_syntax());
}

#[test]
fn test_stray_closer_does_not_end_enclosing_object() {
    let err = parse("{a: [1 )] b 2}").unwrap_err();
    assert_eq!(err.len(), 2);
    assert_eq!(err.errors()[0].offset(), 7);
    assert_eq!(err.errors()[1].offset(), 12);
}

#[test]
fn test_error_columns_count_characters() {
    let err = parse("[\"é\" é: 1]").unwrap_err();
    let first = &err.errors()[0];
    assert_eq!(first.line(), 1);
    assert_eq!(first.column(), 6);
}

#[test]
fn test_semantic_errors_are_all_reported() {
    let err = parse("{a: 0xFFFFFFFFFFFFFFFFF b: 2021-13-01 c: \"\\uDFFF\" d: 1e400}").unwrap_err();
    assert_eq!(err.len(), 4);
    assert!(err.errors().iter().all(Error::is_semantic));
}

#[test]
fn test_display_lists_every_problem() {
    let err = parse("{a 1 b 2}").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("found 2 problems in FRED input"));
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Syntax error at line 1, column 4 in pair: expected `:`, found number `1`"));
}

#[test]
fn test_nesting_limit_reports_once_per_region() {
    let options = ParseOptions::new().with_max_depth(1);
    let err = parse_with_options("[[1] [2] 3]", &options).unwrap_err();
    assert_eq!(err.len(), 2);
    assert!(err
        .errors()
        .iter()
        .all(|e| matches!(e, Error::NestingTooDeep { limit: 1, .. })));
}

#[test]
fn test_invalid_utf8() {
    let err = parse_slice(b"{a:\n \"\xC3\x28\"}").unwrap_err();
    assert!(matches!(
        err.errors()[0],
        Error::Encoding {
            offset: 6,
            line: 2,
            col: 3
        }
    ));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = parse("[").unwrap_err();
    assert_error(&err);
    assert_error(&err.errors()[0]);
}
