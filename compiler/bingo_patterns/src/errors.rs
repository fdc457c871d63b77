//! Error types for matching and destructuring.
//!
//! `EvalErrorKind` gives the structured category; factory functions (e.g.
//! `no_matching_clause()`) are the public way to build errors and fill in
//! both `kind` and `message`.

use bingo_parse::ParseError;

use crate::value::Value;

/// Result of running a handler or a match.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Pattern text conforms to none of the grammar forms.
    #[error(transparent)]
    MalformedPattern(ParseError),

    /// No clause accepted the value and the table had no wildcard.
    #[error("no clause matched value {value}")]
    NoMatchingClause { value: String },

    /// The single pattern given to `let_in` did not match.
    #[error("pattern `{pattern}` does not match value {value}")]
    Destructure { pattern: String, value: String },

    /// A requested name was never bound by the pattern.
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },

    /// A handler asks for more arguments than its pattern binds.
    #[error("handler for `{pattern}` takes {declared} arguments, but the pattern binds {arity}")]
    HandlerArity {
        pattern: String,
        arity: usize,
        declared: usize,
    },

    /// Failure raised by a handler.
    #[error("{message}")]
    Custom { message: String },
}

/// Matching error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create a handler-level error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    /// The parse error behind a `MalformedPattern`, if any.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.kind {
            EvalErrorKind::MalformedPattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        malformed_pattern(err)
    }
}

// Factory functions

#[cold]
pub fn malformed_pattern(err: ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedPattern(err))
}

#[cold]
pub fn no_matching_clause(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMatchingClause {
        value: value.to_string(),
    })
}

#[cold]
pub fn destructure_failed(pattern: &str, value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Destructure {
        pattern: pattern.to_string(),
        value: value.to_string(),
    })
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn handler_arity(pattern: &str, arity: usize, declared: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::HandlerArity {
        pattern: pattern.to_string(),
        arity,
        declared,
    })
}

#[cfg(test)]
mod tests;
