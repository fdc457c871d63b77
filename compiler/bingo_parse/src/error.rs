//! Parse error types.
//!
//! Every parse failure is a malformed pattern; `ParseErrorKind` says why and
//! the span points at the offending token inside the pattern text.

use bingo_ir::Span;

/// Why a pattern string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("empty pattern")]
    Empty,
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid numeric literal `{text}`")]
    InvalidNumber { text: String },
    #[error("nested list patterns are not supported")]
    NestedList,
    #[error("binder `{name}` is bound more than once")]
    DuplicateBinder { name: String },
    #[error("`{name}` is not a valid binder (binders start with a lowercase letter)")]
    InvalidBinder { name: String },
    #[error("`{name}` is not a known type name")]
    UnknownType { name: String },
    #[error("unexpected input after the end of the pattern")]
    TrailingInput,
    #[error("cons pattern needs a tail after `:`")]
    MissingTail,
}

/// Malformed pattern error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed pattern `{pattern}`: {kind} (at {span})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Location of the offending token within `pattern`.
    pub span: Span,
    /// The full pattern text.
    pub pattern: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, pattern: impl Into<String>) -> Self {
        ParseError {
            kind,
            span,
            pattern: pattern.into(),
        }
    }
}
