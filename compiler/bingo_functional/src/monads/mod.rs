//! Monadic wrappers. Each one is a [`Nominal`](bingo_patterns::Nominal)
//! object, so type-tag patterns (`IO`, `State`, `ListMonad`) can select on
//! them.

mod io;
mod list;
mod state;

pub use io::Io;
pub use list::ListMonad;
pub use state::State;
