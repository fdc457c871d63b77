//! Literal values in patterns and their normalization.
//!
//! A literal remembers its text and, when the text is a numeral, its numeric
//! value. Comparison against runtime values goes through the numeric value
//! whenever both sides have one, so `"12"`, `12` and `12.0` are all equal.
//! Numeric comparison is exact: `"0.00000000000000001"` does not equal `0`.

use std::fmt;

/// Numeric value of a numeral literal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Parse numeral-shaped text (`-?[0-9]+(\.[0-9]+)?`).
    ///
    /// Rejects everything `str::parse::<f64>` would otherwise accept on top
    /// of that (`inf`, `NaN`, exponents, surrounding whitespace).
    pub fn parse(text: &str) -> Option<Number> {
        if !is_numeral(text) {
            return None;
        }
        if text.contains('.') {
            text.parse().ok().map(Number::Float)
        } else {
            match text.parse() {
                Ok(n) => Some(Number::Int(n)),
                // Out of i64 range: still a numeral, compare as float.
                Err(_) => text.parse().ok().map(Number::Float),
            }
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "lossy view for callers that want a float; equality does not go through it"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Representation-independent equality: `12` equals `12.0`, but values
    /// that differ at all never compare equal.
    #[allow(
        clippy::float_cmp,
        reason = "literal matching is exact; no tolerance is wanted"
    )]
    pub fn numeric_eq(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Int(n), Number::Float(f)) | (Number::Float(f), Number::Int(n)) => {
                float_to_exact_int(f) == Some(n)
            }
        }
    }
}

/// The integer `f` represents exactly, if any.
#[allow(
    clippy::cast_possible_truncation,
    clippy::float_cmp,
    reason = "range and integrality are checked before the result is used"
)]
fn float_to_exact_int(f: f64) -> Option<i64> {
    // i64::MIN is exactly -2^63; 2^63 itself is out of range.
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    (f.is_finite() && f.fract() == 0.0 && (LOWER..UPPER).contains(&f)).then_some(f as i64)
}

/// Whether `text` is an optionally negative decimal numeral.
pub fn is_numeral(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

/// A literal in a pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    text: Box<str>,
    number: Option<Number>,
    quoted: bool,
}

impl Literal {
    /// A quoted literal. `text` is the unescaped content between the quotes.
    pub fn quoted(text: impl Into<Box<str>>) -> Self {
        let text = text.into();
        let number = Number::parse(&text);
        Literal {
            text,
            number,
            quoted: true,
        }
    }

    /// A bare numeral, or `None` if `text` is not numeral-shaped.
    pub fn numeral(text: &str) -> Option<Self> {
        Number::parse(text).map(|number| Literal {
            text: text.into(),
            number: Some(number),
            quoted: false,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<Number> {
        self.number
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Compare against a string value.
    ///
    /// Identical text always matches; otherwise both sides must be numerals
    /// of equal value (`"12.0"` matches `"12"`).
    pub fn matches_str(&self, value: &str) -> bool {
        if *self.text == *value {
            return true;
        }
        match (self.number, Number::parse(value)) {
            (Some(a), Some(b)) => a.numeric_eq(b),
            _ => false,
        }
    }

    /// Compare against an integer value. Only numeric literals can match.
    pub fn matches_int(&self, value: i64) -> bool {
        self.number
            .is_some_and(|n| n.numeric_eq(Number::Int(value)))
    }

    /// Compare against a float value. Only numeric literals can match.
    pub fn matches_float(&self, value: f64) -> bool {
        self.number
            .is_some_and(|n| n.numeric_eq(Number::Float(value)))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quoted {
            return f.write_str(&self.text);
        }
        f.write_str("\"")?;
        for c in self.text.chars() {
            if c == '"' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests;
