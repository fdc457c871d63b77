use super::*;
use pretty_assertions::assert_eq;

// Kind → message round-trip

#[test]
fn no_matching_clause_has_correct_kind() {
    let err = no_matching_clause(&Value::list(vec![Value::int(1)]));
    assert_eq!(
        err.kind,
        EvalErrorKind::NoMatchingClause {
            value: "[1]".to_string()
        }
    );
    assert_eq!(err.message, "no clause matched value [1]");
}

#[test]
fn destructure_has_correct_kind() {
    let err = destructure_failed("(x:xs)", &Value::int(3));
    assert_eq!(err.message, "pattern `(x:xs)` does not match value 3");
}

#[test]
fn unbound_variable_has_correct_kind() {
    let err = unbound_variable("y");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnboundVariable {
            name: "y".to_string()
        }
    );
    assert_eq!(err.to_string(), "unbound variable `y`");
}

#[test]
fn handler_arity_message() {
    let err = handler_arity("(a:_)", 1, 2);
    assert_eq!(
        err.message,
        "handler for `(a:_)` takes 2 arguments, but the pattern binds 1"
    );
}

#[test]
fn custom_error() {
    let err = EvalError::new("division by zero");
    assert_eq!(
        err.kind,
        EvalErrorKind::Custom {
            message: "division by zero".to_string()
        }
    );
    assert!(err.parse_error().is_none());
}

#[test]
fn malformed_pattern_is_transparent() {
    let parse_err = bingo_parse::parse("(x)").err();
    let Some(parse_err) = parse_err else {
        panic!("`(x)` should not parse");
    };
    let err = EvalError::from(parse_err.clone());
    assert_eq!(err.message, parse_err.to_string());
    assert_eq!(err.parse_error(), Some(&parse_err));
}
