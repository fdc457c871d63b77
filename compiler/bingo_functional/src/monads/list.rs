use bingo_patterns::{Nominal, Value};

use crate::algorithms::{flatten, fold, map_deep};

/// Non-deterministic list monad.
///
/// `bind` keeps the source elements and appends what the function produced
/// for each of them, so every step accumulates. `extract` always returns
/// the flattened collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListMonad {
    collection: Vec<Value>,
}

impl ListMonad {
    /// Lists are taken as-is; any other value becomes a singleton.
    pub fn of(value: impl Into<Value>) -> Self {
        let value = value.into();
        let collection = match value.as_list() {
            Some(items) => items.to_vec(),
            None => vec![value],
        };
        ListMonad { collection }
    }

    /// Apply every function to every leaf and append the results.
    pub fn ap<F>(&self, funcs: &[F]) -> ListMonad
    where
        F: Fn(&Value) -> Value,
    {
        let list = self.extract();
        let mapped = funcs.iter().map(|f| map_deep(f, &list));
        let collection = fold(
            |mut acc: Vec<Value>, items: Vec<Value>| {
                acc.extend(items);
                acc
            },
            mapped,
            list.clone(),
        );
        ListMonad { collection }
    }

    pub fn bind(&self, f: impl Fn(&Value) -> ListMonad) -> ListMonad {
        let produced = fold(
            |mut acc: Vec<Value>, item: &Value| {
                acc.push(Value::list(f(item).extract()));
                acc
            },
            &self.collection,
            self.collection.clone(),
        );
        ListMonad::of(Value::list(flatten(&produced)))
    }

    pub fn map(&self, f: impl Fn(&Value) -> Value) -> ListMonad {
        self.bind(|item| ListMonad::of(f(item)))
    }

    /// `map` followed by `extract`.
    pub fn flat_map(&self, f: impl Fn(&Value) -> Value) -> Vec<Value> {
        self.map(f).extract()
    }

    /// The flattened collection.
    pub fn extract(&self) -> Vec<Value> {
        flatten(&self.collection)
    }
}

impl Nominal for ListMonad {
    fn type_name(&self) -> &str {
        "ListMonad"
    }

    fn extract(&self) -> Value {
        Value::list(ListMonad::extract(self))
    }
}
