//! Binding environment produced by a successful match.

use bingo_ir::Binder;
use smallvec::SmallVec;

use crate::Value;

/// Ordered `(binder, value)` pairs.
///
/// Order is binding order, which is the handler's positional parameter
/// order. Environments are built fresh per match attempt and never shared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(Binder, Value); 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, binder: Binder, value: Value) {
        self.entries.push((binder, value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look a value up by binder name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(binder, _)| binder.as_str() == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Binder, &Value)> {
        self.entries.iter().map(|(b, v)| (b, v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(b, _)| b.as_str())
    }

    /// Values in binding order.
    pub fn into_values(self) -> SmallVec<[Value; 4]> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}
