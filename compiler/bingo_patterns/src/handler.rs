//! Clause handlers.

use std::fmt;
use std::sync::Arc;

use crate::{EvalResult, Value};

type HandlerFn = dyn Fn(&[Value]) -> EvalResult + Send + Sync;

/// A callable attached to a clause.
///
/// `arity` is the number of positional parameters the handler declares. It
/// receives exactly that many values: the first `arity` binding values of a
/// successful match, in binding order.
#[derive(Clone)]
pub struct Handler {
    arity: usize,
    func: Arc<HandlerFn>,
}

impl Handler {
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        Handler {
            arity,
            func: Arc::new(func),
        }
    }

    /// A handler that ignores every binding.
    pub fn nullary<F>(func: F) -> Self
    where
        F: Fn() -> EvalResult + Send + Sync + 'static,
    {
        Handler::new(0, move |_| func())
    }

    pub fn unary<F>(func: F) -> Self
    where
        F: Fn(Value) -> EvalResult + Send + Sync + 'static,
    {
        Handler::new(1, move |args| {
            func(args.first().cloned().unwrap_or_default())
        })
    }

    pub fn binary<F>(func: F) -> Self
    where
        F: Fn(Value, Value) -> EvalResult + Send + Sync + 'static,
    {
        Handler::new(2, move |args| {
            let mut args = args.iter().cloned();
            let first = args.next().unwrap_or_default();
            let second = args.next().unwrap_or_default();
            func(first, second)
        })
    }

    /// Declared parameter count.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke with `args`, truncated to the declared arity.
    pub fn invoke(&self, args: &[Value]) -> EvalResult {
        let end = self.arity.min(args.len());
        (self.func)(&args[..end])
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
