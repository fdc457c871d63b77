//! Pattern AST.
//!
//! Five pattern forms, mirroring the textual grammar:
//!
//! | Form | Text | Matches |
//! |------|------|---------|
//! | `Wildcard` | `_` | anything |
//! | `Literal` | `"foo"`, `12` | equal scalar |
//! | `Cons` | `(x:xs)`, `(a:b:_)` | sequence of at least N elements |
//! | `List` | `["foo", bar]` | sequence of exactly N elements |
//! | `TypeTag` | `IO` | nominal object with that type name |

use std::fmt;
use std::sync::Arc;

use crate::Literal;

/// A variable name introduced by a pattern.
///
/// Cheap to clone: binder names are copied into every binding environment.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Binder(Arc<str>);

impl Binder {
    pub fn new(name: &str) -> Self {
        Binder(Arc::from(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binder({})", self.0)
    }
}

impl fmt::Display for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The tail slot of a cons pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Tail {
    /// Bind the remaining suffix.
    Binder(Binder),
    /// Discard the remaining suffix.
    Wildcard,
}

/// Head/tail destructuring: `(a:b:rest)`.
///
/// Invariant: `heads` is non-empty (the parser requires at least one `:`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsPattern {
    pub heads: Vec<Binder>,
    pub tail: Tail,
}

impl fmt::Display for ConsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for head in &self.heads {
            write!(f, "{head}:")?;
        }
        match &self.tail {
            Tail::Binder(b) => write!(f, "{b})"),
            Tail::Wildcard => f.write_str("_)"),
        }
    }
}

/// One position of a list-shape pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ListSlot {
    Literal(Literal),
    Binder(Binder),
    Wildcard,
    /// Embedded cons sub-pattern, e.g. the `(x:xs)` in `[a, (x:xs), b]`.
    Cons(ConsPattern),
}

impl fmt::Display for ListSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSlot::Literal(lit) => write!(f, "{lit}"),
            ListSlot::Binder(b) => write!(f, "{b}"),
            ListSlot::Wildcard => f.write_str("_"),
            ListSlot::Cons(cons) => write!(f, "{cons}"),
        }
    }
}

/// A parsed pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPattern {
    Wildcard,
    Literal(Literal),
    Cons(ConsPattern),
    List(Vec<ListSlot>),
    TypeTag(Box<str>),
}

/// Pattern form without payload, for logging and dispatch tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Wildcard,
    Literal,
    Cons,
    List,
    TypeTag,
}

impl PatternKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Wildcard => "wildcard",
            PatternKind::Literal => "literal",
            PatternKind::Cons => "cons",
            PatternKind::List => "list",
            PatternKind::TypeTag => "type tag",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MatchPattern {
    pub fn kind(&self) -> PatternKind {
        match self {
            MatchPattern::Wildcard => PatternKind::Wildcard,
            MatchPattern::Literal(_) => PatternKind::Literal,
            MatchPattern::Cons(_) => PatternKind::Cons,
            MatchPattern::List(_) => PatternKind::List,
            MatchPattern::TypeTag(_) => PatternKind::TypeTag,
        }
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, MatchPattern::Wildcard)
    }
}

/// Last segment of a `::` or `\` separated type path.
///
/// `Monads::State` and `Chemem\Monads\State` both yield `State`; a bare
/// name yields itself.
pub fn last_path_segment(path: &str) -> &str {
    let after_colons = path.rsplit("::").next().unwrap_or(path);
    after_colons.rsplit('\\').next().unwrap_or(after_colons)
}

/// Canonical text. Parsing the output yields an equal pattern.
impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPattern::Wildcard => f.write_str("_"),
            MatchPattern::Literal(lit) => write!(f, "{lit}"),
            MatchPattern::Cons(cons) => write!(f, "{cons}"),
            MatchPattern::List(slots) => {
                f.write_str("[")?;
                for (i, slot) in slots.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{slot}")?;
                }
                f.write_str("]")
            }
            MatchPattern::TypeTag(name) => f.write_str(name),
        }
    }
}
