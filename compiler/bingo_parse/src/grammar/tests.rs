use super::*;
use bingo_ir::PatternKind;
use pretty_assertions::assert_eq;

fn parse(text: &str) -> Result<MatchPattern, ParseError> {
    Parser::new(text, &ParseOptions::default()).parse()
}

fn parse_err(text: &str) -> ParseErrorKind {
    match parse(text) {
        Ok(pattern) => panic!("expected `{text}` to be malformed, got {pattern:?}"),
        Err(err) => err.kind,
    }
}

fn b(name: &str) -> Binder {
    Binder::new(name)
}

#[test]
fn wildcard() {
    assert_eq!(parse("_"), Ok(MatchPattern::Wildcard));
    assert_eq!(parse("  _  "), Ok(MatchPattern::Wildcard));
}

#[test]
fn cons_with_wildcard_tail() {
    assert_eq!(
        parse("(dividend:divisor:_)"),
        Ok(MatchPattern::Cons(ConsPattern {
            heads: vec![b("dividend"), b("divisor")],
            tail: Tail::Wildcard,
        }))
    );
}

#[test]
fn cons_with_binder_tail() {
    assert_eq!(
        parse("( x : xs )"),
        Ok(MatchPattern::Cons(ConsPattern {
            heads: vec![b("x")],
            tail: Tail::Binder(b("xs")),
        }))
    );
}

#[test]
fn cons_errors() {
    assert_eq!(parse_err("(x)"), ParseErrorKind::MissingTail);
    assert_eq!(parse_err("(_)"), ParseErrorKind::MissingTail);
    assert!(matches!(
        parse_err("(_:xs)"),
        ParseErrorKind::UnexpectedToken {
            expected: "a binder",
            ..
        }
    ));
    assert!(matches!(
        parse_err("(x:xs"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
    assert!(matches!(
        parse_err("(X:xs)"),
        ParseErrorKind::InvalidBinder { .. }
    ));
    assert!(matches!(
        parse_err("(:xs)"),
        ParseErrorKind::UnexpectedToken { .. }
    ));
}

#[test]
fn list_with_literals_and_binder() {
    assert_eq!(
        parse(r#"["foo", "bar", baz]"#),
        Ok(MatchPattern::List(vec![
            ListSlot::Literal(Literal::quoted("foo")),
            ListSlot::Literal(Literal::quoted("bar")),
            ListSlot::Binder(b("baz")),
        ]))
    );
}

#[test]
fn list_with_nested_cons() {
    assert_eq!(
        parse("[a, (x:xs), b]"),
        Ok(MatchPattern::List(vec![
            ListSlot::Binder(b("a")),
            ListSlot::Cons(ConsPattern {
                heads: vec![b("x")],
                tail: Tail::Binder(b("xs")),
            }),
            ListSlot::Binder(b("b")),
        ]))
    );
}

#[test]
fn list_with_wildcards_and_numbers() {
    let rendered = parse("[_, 'book', 12, -1.5]").map(|p| p.to_string());
    assert_eq!(rendered, Ok(r#"[_, "book", 12, -1.5]"#.to_string()));
}

#[test]
fn empty_list() {
    assert_eq!(parse("[]"), Ok(MatchPattern::List(vec![])));
    assert_eq!(parse("[ ]"), Ok(MatchPattern::List(vec![])));
}

#[test]
fn list_errors() {
    assert_eq!(parse_err("[[a]]"), ParseErrorKind::NestedList);
    assert!(matches!(parse_err("[a,]"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("[a b]"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err("[Foo]"), ParseErrorKind::InvalidBinder { .. }));
    assert_eq!(parse_err("[\"foo"), ParseErrorKind::UnterminatedString);
}

#[test]
fn duplicate_binders_rejected() {
    assert_eq!(
        parse_err("[a, a]"),
        ParseErrorKind::DuplicateBinder {
            name: "a".to_string()
        }
    );
    assert_eq!(
        parse_err("[x, (x:xs)]"),
        ParseErrorKind::DuplicateBinder {
            name: "x".to_string()
        }
    );
}

#[test]
fn literals() {
    assert_eq!(
        parse("\"foo\""),
        Ok(MatchPattern::Literal(Literal::quoted("foo")))
    );
    assert_eq!(
        parse("'12'"),
        Ok(MatchPattern::Literal(Literal::quoted("12")))
    );
    let Ok(MatchPattern::Literal(lit)) = parse("42") else {
        panic!("expected literal");
    };
    assert!(!lit.is_quoted());
    assert!(lit.matches_int(42));
}

#[test]
fn escaped_string_literal() {
    let Ok(MatchPattern::Literal(lit)) = parse(r#""say \"hi\"""#) else {
        panic!("expected literal");
    };
    assert_eq!(lit.text(), r#"say "hi""#);
}

#[test]
fn type_tags() {
    assert_eq!(parse("IO"), Ok(MatchPattern::TypeTag("IO".into())));
    assert_eq!(
        parse("Monads::State"),
        Ok(MatchPattern::TypeTag("Monads::State".into()))
    );
    assert_eq!(
        parse(r"Functors\Monads\ListMonad"),
        Ok(MatchPattern::TypeTag(r"Functors\Monads\ListMonad".into()))
    );
}

#[test]
fn lowercase_bare_identifier_is_not_a_type() {
    assert_eq!(
        parse_err("foo"),
        ParseErrorKind::UnknownType {
            name: "foo".to_string()
        }
    );
}

#[test]
fn known_types_configuration() {
    let options = ParseOptions::new().with_known_types(["IO"]);
    let parse_with = |text: &str| Parser::new(text, &options).parse();
    assert_eq!(parse_with("IO"), Ok(MatchPattern::TypeTag("IO".into())));
    assert!(matches!(
        parse_with("State").map_err(|e| e.kind),
        Err(ParseErrorKind::UnknownType { .. })
    ));
}

#[test]
fn empty_and_garbage() {
    assert_eq!(parse_err(""), ParseErrorKind::Empty);
    assert_eq!(parse_err("   "), ParseErrorKind::Empty);
    assert!(matches!(parse_err("?"), ParseErrorKind::UnexpectedToken { .. }));
    assert!(matches!(parse_err(")"), ParseErrorKind::UnexpectedToken { .. }));
    assert_eq!(parse_err("\"abc"), ParseErrorKind::UnterminatedString);
}

#[test]
fn trailing_input_rejected() {
    assert_eq!(parse_err("_ _"), ParseErrorKind::TrailingInput);
    assert_eq!(parse_err("(x:xs) y"), ParseErrorKind::TrailingInput);
    assert_eq!(parse_err("\"a\" \"b\""), ParseErrorKind::TrailingInput);
}

#[test]
fn error_span_points_at_offending_token() {
    let err = parse("[a, ?]").err();
    let span = err.as_ref().map(|e| e.span);
    assert_eq!(span, Some(Span::new(4, 5)));
    assert_eq!(err.map(|e| e.pattern), Some("[a, ?]".to_string()));
}

#[test]
fn kind_of_parsed_patterns() {
    let kinds: Vec<PatternKind> = ["_", "1", "(a:_)", "[a]", "IO"]
        .iter()
        .filter_map(|t| parse(t).ok())
        .map(|p| p.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            PatternKind::Wildcard,
            PatternKind::Literal,
            PatternKind::Cons,
            PatternKind::List,
            PatternKind::TypeTag,
        ]
    );
}

#[test]
fn unescape_handles_trailing_backslash() {
    assert_eq!(unescape(r#""a\\b""#), r"a\b");
    assert_eq!(unescape("\"\""), "");
}
