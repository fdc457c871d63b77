use super::*;
use pretty_assertions::assert_eq;

#[test]
fn numeral_shapes() {
    assert!(is_numeral("12"));
    assert!(is_numeral("-3"));
    assert!(is_numeral("2.50"));
    assert!(!is_numeral(""));
    assert!(!is_numeral("-"));
    assert!(!is_numeral("1."));
    assert!(!is_numeral(".5"));
    assert!(!is_numeral("1e5"));
    assert!(!is_numeral("inf"));
    assert!(!is_numeral(" 1"));
}

#[test]
fn number_parse() {
    assert_eq!(Number::parse("12"), Some(Number::Int(12)));
    assert_eq!(Number::parse("-2.5"), Some(Number::Float(-2.5)));
    assert_eq!(Number::parse("NaN"), None);
    assert!(matches!(
        Number::parse("99999999999999999999"),
        Some(Number::Float(_))
    ));
}

#[test]
fn quoted_numeral_matches_int() {
    let lit = Literal::quoted("12");
    assert!(lit.matches_int(12));
    assert!(lit.matches_float(12.0));
    assert!(lit.matches_str("12"));
    assert!(lit.matches_str("12.0"));
    assert!(!lit.matches_int(24));
}

#[test]
fn tiny_fraction_does_not_equal_zero() {
    let lit = Literal::quoted("0.00000000000000001");
    assert!(!lit.matches_int(0));
    assert!(!lit.matches_float(0.0));
    assert!(!lit.matches_str("0"));
    assert!(lit.matches_str("0.00000000000000001"));
}

#[test]
fn numeric_eq_is_exact() {
    assert!(Number::Int(12).numeric_eq(Number::Float(12.0)));
    assert!(Number::Float(-3.0).numeric_eq(Number::Int(-3)));
    assert!(Number::Int(i64::MIN).numeric_eq(Number::Float(-9_223_372_036_854_775_808.0)));
    assert!(!Number::Float(0.1 + 0.2).numeric_eq(Number::Float(0.3)));
    assert!(!Number::Int(12).numeric_eq(Number::Float(12.5)));
    // 2^63 rounds from i64::MAX under a lossy cast; it is not equal.
    assert!(!Number::Int(i64::MAX).numeric_eq(Number::Float(9_223_372_036_854_775_808.0)));
    assert!(!Number::Int(0).numeric_eq(Number::Float(f64::NAN)));
}

#[test]
fn text_literal_matches_only_identical_text() {
    let lit = Literal::quoted("foo");
    assert!(lit.matches_str("foo"));
    assert!(!lit.matches_str("FOO"));
    assert!(!lit.matches_int(0));
    assert_eq!(lit.number(), None);
}

#[test]
fn empty_string_does_not_match_numeral() {
    let lit = Literal::quoted("1");
    assert!(!lit.matches_str(""));
}

#[test]
fn bare_numeral() {
    let lit = Literal::numeral("7").unwrap_or_else(|| Literal::quoted("?"));
    assert!(!lit.is_quoted());
    assert!(lit.matches_int(7));
    assert!(Literal::numeral("seven").is_none());
}

#[test]
fn display_escapes_quotes() {
    assert_eq!(Literal::quoted(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
    assert_eq!(Literal::quoted("foo").to_string(), "\"foo\"");
    assert_eq!(Literal::numeral("-4").map(|l| l.to_string()), Some("-4".to_string()));
}
