//! Collection helpers over [`Value`] lists.

use bingo_patterns::Value;
use tracing::debug;

/// Left fold.
pub fn fold<T, A, F>(f: F, items: impl IntoIterator<Item = T>, init: A) -> A
where
    F: FnMut(A, T) -> A,
{
    items.into_iter().fold(init, f)
}

/// Flatten nested lists into one level, depth first.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    fold(
        |mut acc: Vec<Value>, item: &Value| {
            match item.as_list() {
                Some(inner) => acc.extend(flatten(inner)),
                None => acc.push(item.clone()),
            }
            acc
        },
        items,
        Vec::with_capacity(items.len()),
    )
}

/// Apply `f` to every non-list leaf, keeping the nesting.
pub fn map_deep(f: &impl Fn(&Value) -> Value, items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item.as_list() {
            Some(inner) => Value::list(map_deep(f, inner)),
            None => f(item),
        })
        .collect()
}

/// Largest integer in `items`, folded from `0`.
///
/// Any non-integer element makes the whole result `0`.
pub fn max(items: &[Value]) -> i64 {
    let ints: Option<Vec<i64>> = items.iter().map(Value::as_int).collect();
    match ints {
        Some(ints) => fold(|acc, n| if n > acc { n } else { acc }, ints, 0),
        None => {
            debug!(len = items.len(), "max over a non-integer collection");
            0
        }
    }
}
