//! Scoped destructuring.
//!
//! `let_in` matches one pattern against one value and keeps the resulting
//! environment. Callers then ask for a subset of the bound names, in any
//! order:
//!
//! ```text
//! let_in("[a, _, (x:xs)]", &value)?.apply(&["x", "xs"], |v| ...)
//! ```

use bingo_ir::MatchPattern;
use smallvec::SmallVec;

use crate::errors::{destructure_failed, unbound_variable, EvalError};
use crate::matcher::try_match_prefix;
use crate::{Bindings, Value};

/// A successful destructuring.
#[derive(Clone, Debug)]
pub struct LetIn {
    pattern: MatchPattern,
    bindings: Bindings,
}

impl LetIn {
    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// The whole environment, in binding order.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Values for `names`, in request order.
    pub fn extract(&self, names: &[&str]) -> Result<SmallVec<[Value; 4]>, EvalError> {
        names
            .iter()
            .map(|name| {
                self.bindings
                    .get(name)
                    .cloned()
                    .ok_or_else(|| unbound_variable(name))
            })
            .collect()
    }

    /// Call `body` with the values for `names`, in request order.
    pub fn apply<R>(&self, names: &[&str], body: impl FnOnce(&[Value]) -> R) -> Result<R, EvalError> {
        let values = self.extract(names)?;
        Ok(body(&values))
    }
}

/// Match `pattern` against `value` once.
///
/// A trailing `_` in a list shape discards the rest of a longer list, so
/// `[a, b, c, _]` destructures the first three elements of `1..=10`.
#[tracing::instrument(level = "debug", skip(value))]
pub fn let_in(pattern: &str, value: &Value) -> Result<LetIn, EvalError> {
    let parsed = bingo_parse::parse(pattern)?;
    match try_match_prefix(&parsed, value) {
        Some(bindings) => Ok(LetIn {
            pattern: parsed,
            bindings,
        }),
        None => Err(destructure_failed(pattern, value)),
    }
}
