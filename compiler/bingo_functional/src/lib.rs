//! Bingo Functional - monads and collection helpers for the Bingo
//! pattern matcher.
//!
//! The monads implement [`Nominal`](bingo_patterns::Nominal) and are
//! selected by type-tag patterns:
//!
//! ```text
//! "IO"        -> Io
//! "State"     -> State
//! "ListMonad" -> ListMonad
//! ```

pub mod algorithms;
pub mod monads;

pub use algorithms::{flatten, fold, map_deep, max};
pub use monads::{Io, ListMonad, State};
