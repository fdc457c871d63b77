use std::fmt;
use std::sync::Arc;

use bingo_patterns::{Nominal, Value};

type Transition = dyn Fn(Value) -> (Value, Value) + Send + Sync;

/// A state transition `s -> (value, s')`.
#[derive(Clone)]
pub struct State {
    transition: Arc<Transition>,
}

impl State {
    pub fn new(transition: impl Fn(Value) -> (Value, Value) + Send + Sync + 'static) -> Self {
        State {
            transition: Arc::new(transition),
        }
    }

    /// Produce `value` and leave the state untouched.
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        State::new(move |state| (value.clone(), state))
    }

    /// The current state as the value.
    pub fn get() -> Self {
        State::new(|state| (state.clone(), state))
    }

    /// Replace the state.
    pub fn put(next: impl Into<Value>) -> Self {
        let next = next.into();
        State::new(move |_| (Value::Null, next.clone()))
    }

    #[must_use]
    pub fn map(&self, f: impl Fn(Value) -> Value + Send + Sync + 'static) -> State {
        let transition = Arc::clone(&self.transition);
        State::new(move |state| {
            let (value, next) = transition(state);
            (f(value), next)
        })
    }

    #[must_use]
    pub fn bind(&self, f: impl Fn(Value) -> State + Send + Sync + 'static) -> State {
        let transition = Arc::clone(&self.transition);
        State::new(move |state| {
            let (value, next) = transition(state);
            f(value).run(next)
        })
    }

    pub fn run(&self, state: Value) -> (Value, Value) {
        (self.transition)(state)
    }

    pub fn eval_state(&self, state: Value) -> Value {
        self.run(state).0
    }

    pub fn exec_state(&self, state: Value) -> Value {
        self.run(state).1
    }
}

impl Nominal for State {
    fn type_name(&self) -> &str {
        "State"
    }

    /// Runs from a `Null` initial state.
    fn extract(&self) -> Value {
        self.eval_state(Value::Null)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}
