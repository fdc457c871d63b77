use std::fmt;
use std::sync::Arc;

use bingo_patterns::{Nominal, Value};
use tracing::trace;

type Thunk = dyn Fn() -> Value + Send + Sync;

/// A deferred computation. Nothing runs until [`exec`](Io::exec).
#[derive(Clone)]
pub struct Io {
    thunk: Arc<Thunk>,
}

impl Io {
    pub fn new(thunk: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Io {
            thunk: Arc::new(thunk),
        }
    }

    /// Wrap a plain value.
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        Io::new(move || value.clone())
    }

    #[must_use]
    pub fn map(&self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Io {
        let thunk = Arc::clone(&self.thunk);
        Io::new(move || f(thunk()))
    }

    #[must_use]
    pub fn bind(&self, f: impl Fn(Value) -> Io + Send + Sync + 'static) -> Io {
        let thunk = Arc::clone(&self.thunk);
        Io::new(move || f(thunk()).exec())
    }

    pub fn exec(&self) -> Value {
        trace!("running IO action");
        (self.thunk)()
    }
}

impl Nominal for Io {
    fn type_name(&self) -> &str {
        "IO"
    }

    fn extract(&self) -> Value {
        self.exec()
    }
}

impl fmt::Debug for Io {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Io").finish_non_exhaustive()
    }
}
