//! Bingo IR - pattern representation shared by the parser and the matcher.
//!
//! This crate provides:
//! - The pattern AST ([`MatchPattern`], [`ConsPattern`], [`ListSlot`])
//! - Normalized literals ([`Literal`], [`Number`])
//! - Arity analysis (see [`MatchPattern::arity`])
//! - Source spans within pattern text ([`Span`])
//!
//! Patterns are immutable once built. Nothing here re-parses text; the only
//! producer of `MatchPattern` from strings is `bingo_parse`.

mod arity;
mod literal;
mod pattern;
mod span;

pub use literal::{is_numeral, Literal, Number};
pub use pattern::{
    last_path_segment, Binder, ConsPattern, ListSlot, MatchPattern, PatternKind, Tail,
};
pub use span::Span;
