//! End-to-end pattern matching scenarios over the functional collaborators.

use bingo_functional::{max, Io, ListMonad, State};
use bingo_patterns::{
    build_matcher, eval_array_pattern, eval_object_pattern, eval_string_pattern,
    get_num_conditions, init_tracing, let_in, match_once, EvalError, Handler, RuleTable, Value,
};
use pretty_assertions::assert_eq;

fn text(s: &str) -> Handler {
    let s = s.to_string();
    Handler::nullary(move || Ok(Value::string(s.clone())))
}

fn words(ws: &[&str]) -> Value {
    ws.iter().copied().map(Value::string).collect()
}

#[test]
fn num_conditions_lists_arities() {
    init_tracing();
    let counts = get_num_conditions(&["(a:b:_)", "(a:_)", "_"]);
    assert_eq!(
        counts,
        Ok(vec![
            ("(a:b:_)".to_string(), 2),
            ("(a:_)".to_string(), 1),
            ("_".to_string(), 0),
        ])
    );
}

#[test]
fn match_divides() {
    init_tracing();
    let table = RuleTable::new()
        .with(
            "(dividend:divisor:_)",
            Handler::binary(|a, b| match (a.as_int(), b.as_int()) {
                (Some(a), Some(b)) if b != 0 => Ok(Value::int(a / b)),
                _ => Err(EvalError::new("cannot divide")),
            }),
        )
        .with(
            "(dividend:_)",
            Handler::unary(|a| Ok(Value::int(a.as_int().unwrap_or(0) / 2))),
        )
        .with("_", Handler::nullary(|| Ok(Value::int(1))));
    let matcher = build_matcher(&table).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(matcher.call_args(vec![Value::int(10), Value::int(5)]), Ok(Value::int(2)));
    assert_eq!(matcher.call_args(vec![Value::int(10)]), Ok(Value::int(5)));
    assert_eq!(matcher.call_args(vec![]), Ok(Value::int(1)));
}

#[test]
fn string_patterns_over_strings() {
    let table = RuleTable::new()
        .with("\"foo\"", text("foo"))
        .with("\"bar\"", text("bar"))
        .with("_", text("undefined"));
    assert_eq!(eval_string_pattern(&table, &Value::string("foo")), Ok(Value::string("foo")));
    assert_eq!(
        eval_string_pattern(&table, &Value::string("baz")),
        Ok(Value::string("undefined"))
    );
}

#[test]
fn string_patterns_over_numbers() {
    let table = RuleTable::new()
        .with("\"1\"", text("first"))
        .with("\"2\"", text("second"))
        .with("_", text("undefined"));
    assert_eq!(eval_string_pattern(&table, &Value::int(1)), Ok(Value::string("first")));
    assert_eq!(eval_string_pattern(&table, &Value::int(24)), Ok(Value::string("undefined")));
    assert_eq!(
        eval_string_pattern(&table, &Value::string("")),
        Ok(Value::string("undefined"))
    );
}

#[test]
fn array_patterns() {
    let table = RuleTable::new()
        .with(
            r#"["foo", "bar", baz]"#,
            Handler::unary(|baz| Ok(Value::string(baz.display_value().to_uppercase()))),
        )
        .with(r#"["foo", "bar"]"#, text("foo-bar"))
        .with("_", text("undefined"));
    assert_eq!(eval_array_pattern(&table, &words(&["foo", "bar"])), Ok(Value::string("foo-bar")));
    assert_eq!(
        eval_array_pattern(&table, &words(&["foo", "bar", "cat"])),
        Ok(Value::string("CAT"))
    );
    assert_eq!(eval_array_pattern(&table, &words(&[])), Ok(Value::string("undefined")));
}

#[test]
fn single_value_match() {
    let table = RuleTable::new()
        .with("\"foo\"", Handler::nullary(|| Ok(Value::string("FOO"))))
        .with("\"12\"", Handler::nullary(|| Ok(Value::int(12 * 12))))
        .with("_", text("undefined"));
    assert_eq!(match_once(&table, &Value::string("foo")), Ok(Value::string("FOO")));
    assert_eq!(match_once(&table, &Value::int(12)), Ok(Value::int(144)));
}

#[test]
fn multiple_value_match() {
    let table = RuleTable::new()
        .with(r#"[_, "book"]"#, text("functional programming"))
        .with(
            r#"["hello", name]"#,
            Handler::unary(|name| Ok(Value::string(format!("Hello {}", name.display_value())))),
        )
        .with("[a, (x:xs), b]", text("multiple"))
        .with("_", text("undefined"));
    assert_eq!(match_once(&table, &words(&["api", "book"])), Ok(Value::string("functional programming")));
    assert_eq!(
        match_once(&table, &words(&["hello", "World"])),
        Ok(Value::string("Hello World"))
    );
    let nested = Value::list(vec![
        Value::int(3),
        Value::list(vec![Value::int(5), Value::int(7)]),
        Value::int(9),
    ]);
    assert_eq!(match_once(&table, &nested), Ok(Value::string("multiple")));
    assert_eq!(match_once(&table, &words(&["pennies"])), Ok(Value::string("undefined")));
}

#[test]
fn object_patterns() {
    let table = RuleTable::new()
        .with("IO", text("IO monad"))
        .with("State", text("State monad"))
        .with("_", text("NaN"));
    let io = Value::object(Io::new(|| Value::int(12)));
    assert_eq!(eval_object_pattern(&table, &io), Ok(Value::string("IO monad")));
    let state = Value::object(State::of(1));
    assert_eq!(eval_object_pattern(&table, &state), Ok(Value::string("State monad")));
    let list = Value::object(ListMonad::of(1));
    assert_eq!(eval_object_pattern(&table, &list), Ok(Value::string("NaN")));
}

#[test]
fn object_patterns_with_qualified_names() {
    let table = RuleTable::new()
        .with(r"Chemem\Bingo\Functional\Functors\Monads\IO", text("IO monad"))
        .with("Monads::State", text("State monad"))
        .with("_", text("NaN"));
    let io = Value::object(Io::of(12));
    assert_eq!(eval_object_pattern(&table, &io), Ok(Value::string("IO monad")));
    let state = Value::object(State::of(1));
    assert_eq!(eval_object_pattern(&table, &state), Ok(Value::string("State monad")));
    let list = Value::object(ListMonad::of(1));
    assert_eq!(eval_object_pattern(&table, &list), Ok(Value::string("NaN")));
}

#[test]
fn object_pattern_handler_receives_the_object() {
    let table = RuleTable::new()
        .with("IO", Handler::unary(|io| Ok(io.as_object().map_or(Value::Null, |o| o.extract()))))
        .with("_", text("NaN"));
    let io = Value::object(Io::of(12).map(|v| Value::int(v.as_int().unwrap_or(0) * 2)));
    assert_eq!(match_once(&table, &io), Ok(Value::int(24)));
}

#[test]
fn let_in_destructures_range() {
    let one_to_ten: Value = (1..=10).map(Value::int).collect();
    let scope = let_in("[a, b, c, _]", &one_to_ten).unwrap_or_else(|e| panic!("{e}"));
    let result = scope.apply(&["c"], |vals| vals[0].as_int().map(|c| c * 10));
    assert_eq!(result, Ok(Some(30)));
}

#[test]
fn selection_keeps_trailing_wildcard_exact() {
    let table = RuleTable::new()
        .with(r#"["foo", _]"#, text("pair"))
        .with("_", text("other"));
    assert_eq!(match_once(&table, &words(&["foo", "a"])), Ok(Value::string("pair")));
    assert_eq!(match_once(&table, &words(&["foo", "a", "b"])), Ok(Value::string("other")));
    // Destructuring the same shape still takes a prefix.
    let scope = let_in(r#"["foo", x, _]"#, &words(&["foo", "a", "b", "c"]));
    let first = scope.and_then(|s| s.apply(&["x"], |vals| vals[0].clone()));
    assert_eq!(first, Ok(Value::string("a")));
}

#[test]
fn let_in_with_wildcards() {
    let value = Value::list(vec![
        Value::int(1),
        Value::string("foo"),
        Value::list(vec![Value::int(3), Value::int(9)]),
    ]);
    let scope = let_in("[a, _, (x:xs)]", &value).unwrap_or_else(|e| panic!("{e}"));
    let result = scope.apply(&["x", "xs"], |vals| {
        let fst = vals[0].as_int().unwrap_or(1);
        let head = vals[1].as_list().and_then(|xs| xs.first()).and_then(Value::as_int);
        head.map(|h| h / fst)
    });
    assert_eq!(result, Ok(Some(3)));
}

#[test]
fn max_as_a_handler() {
    let table = RuleTable::new()
        .with(
            "(x:xs)",
            Handler::binary(|x, xs| {
                let mut all = vec![x];
                all.extend(xs.as_list().unwrap_or(&[]).iter().cloned());
                Ok(Value::int(max(&all)))
            }),
        )
        .with("_", Handler::nullary(|| Ok(Value::int(0))));
    let list = ListMonad::of(Value::list(vec![Value::int(4), Value::int(11), Value::int(7)]));
    assert_eq!(match_once(&table, &Value::list(list.extract())), Ok(Value::int(11)));
    assert_eq!(match_once(&table, &Value::list(vec![])), Ok(Value::int(0)));
    let mixed = Value::list(vec![Value::int(4), Value::string("x")]);
    assert_eq!(match_once(&table, &mixed), Ok(Value::int(0)));
}
