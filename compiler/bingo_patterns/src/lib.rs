#![allow(
    clippy::result_large_err,
    reason = "EvalError carries the full parse error; boxing would ripple through every handler"
)]
//! Bingo Patterns - runtime side of the Bingo pattern matcher.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, nominal objects via `Nominal`)
//! - The value matcher (`try_match`, and `try_match_prefix` for
//!   destructuring) producing `Bindings`
//! - Clause selection over ordered rule tables (`Matcher`, `match_once`)
//! - Scoped destructuring (`let_in`)
//!
//! Pattern text is parsed by `bingo_parse`; this crate never looks at
//! strings except through the parsed `MatchPattern`.
//!
//! # Value Types
//!
//! Heap allocations go through `Value::` factory methods, and `Heap<T>`
//! enforces this. Everything is `Arc`-shared, so values, patterns and built
//! matchers are `Send + Sync`.

mod bindings;
mod errors;
mod handler;
mod let_in;
mod matcher;
mod select;
mod value;

use std::sync::Once;

pub use bingo_ir::{MatchPattern, PatternKind};
pub use bingo_parse::{ParseError, ParseOptions, PatternParser};
pub use bindings::Bindings;
pub use errors::{
    destructure_failed, handler_arity, malformed_pattern, no_matching_clause, unbound_variable,
    EvalError, EvalErrorKind, EvalResult,
};
pub use handler::Handler;
pub use let_in::{let_in, LetIn};
pub use matcher::{accepts_shape, try_match, try_match_prefix};
pub use select::{
    build_matcher, eval_array_pattern, eval_object_pattern, eval_string_pattern,
    get_num_conditions, match_once, Clause, Matcher, MatcherBuilder, MatcherKind, RuleTable,
};
pub use value::{Heap, Nominal, ObjectValue, Value, ValueShape};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=bingo_patterns=debug` or `RUST_LOG=bingo_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
