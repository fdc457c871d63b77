//! Value matcher: decides whether a pattern accepts a value.
//!
//! Dispatch is on the pattern form composed with the value's
//! [`ValueShape`]:
//!
//! | Shape | Accepting forms |
//! |-------|-----------------|
//! | scalar | wildcard, literal |
//! | sequence | wildcard, cons, list |
//! | nominal | wildcard, type tag |
//!
//! A match either succeeds with a complete environment or fails with
//! `None`; partial bindings are never observable.

use bingo_ir::{last_path_segment, ConsPattern, ListSlot, Literal, MatchPattern, PatternKind, Tail};

use crate::{Bindings, Value, ValueShape};

/// How a list shape treats elements beyond its slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ListLength {
    /// Length must equal the slot count.
    Exact,
    /// A trailing `_` also absorbs any further elements.
    OpenTail,
}

/// Try to match `pattern` against `value`, returning bindings if successful.
///
/// List shapes are length-exact: `["foo", _]` accepts only two-element
/// lists.
pub fn try_match(pattern: &MatchPattern, value: &Value) -> Option<Bindings> {
    match_value(pattern, value, ListLength::Exact)
}

/// Like [`try_match`], except that a list shape ending in `_` accepts any
/// longer list, discarding the surplus. Used for one-shot destructuring,
/// where `[a, b, c, _]` takes the first three elements of a longer list.
pub fn try_match_prefix(pattern: &MatchPattern, value: &Value) -> Option<Bindings> {
    match_value(pattern, value, ListLength::OpenTail)
}

fn match_value(pattern: &MatchPattern, value: &Value, length: ListLength) -> Option<Bindings> {
    match (pattern, value.shape()) {
        (MatchPattern::Wildcard, _) => Some(Bindings::new()),

        (MatchPattern::Literal(lit), ValueShape::Scalar) => {
            literal_matches(lit, value).then(Bindings::new)
        }

        (MatchPattern::Cons(cons), ValueShape::Sequence) => {
            let mut bindings = Bindings::new();
            bind_cons(cons, value.as_list()?, &mut bindings).then_some(bindings)
        }

        (MatchPattern::List(slots), ValueShape::Sequence) => {
            match_list(slots, value.as_list()?, length)
        }

        (MatchPattern::TypeTag(name), ValueShape::Nominal) => {
            let object = value.as_object()?;
            type_tag_matches(name, object.type_name()).then(Bindings::new)
        }

        _ => None,
    }
}

/// Whether a pattern form can ever accept a value of this shape.
pub fn accepts_shape(kind: PatternKind, shape: ValueShape) -> bool {
    match kind {
        PatternKind::Wildcard => true,
        PatternKind::Literal => shape == ValueShape::Scalar,
        PatternKind::Cons | PatternKind::List => shape == ValueShape::Sequence,
        PatternKind::TypeTag => shape == ValueShape::Nominal,
    }
}

/// A tag names a type by its full text or by its last path segment, so
/// `IO`, `Monads::IO` and `Chemem\Monads\IO` all select an `IO` object.
fn type_tag_matches(tag: &str, type_name: &str) -> bool {
    tag == type_name || last_path_segment(tag) == type_name
}

/// Normalized literal equality. `Null` and `Bool` never equal a literal.
fn literal_matches(lit: &Literal, value: &Value) -> bool {
    match value {
        Value::Str(s) => lit.matches_str(s),
        Value::Int(n) => lit.matches_int(*n),
        Value::Float(x) => lit.matches_float(*x),
        Value::Null | Value::Bool(_) | Value::List(_) | Value::Object(_) => false,
    }
}

/// Bind `(h1:h2:...:tail)` against `items`. Requires at least as many
/// items as heads; the suffix (possibly empty) goes to the tail binder.
fn bind_cons(cons: &ConsPattern, items: &[Value], bindings: &mut Bindings) -> bool {
    if items.len() < cons.heads.len() {
        return false;
    }
    let (heads, rest) = items.split_at(cons.heads.len());
    for (binder, item) in cons.heads.iter().zip(heads) {
        bindings.push(binder.clone(), item.clone());
    }
    if let Tail::Binder(binder) = &cons.tail {
        bindings.push(binder.clone(), Value::list(rest.to_vec()));
    }
    true
}

/// Match a list shape. Length must equal the slot count, except that under
/// [`ListLength::OpenTail`] a trailing `_` also absorbs further elements.
fn match_list(slots: &[ListSlot], items: &[Value], length: ListLength) -> Option<Bindings> {
    let open_ended =
        length == ListLength::OpenTail && matches!(slots.last(), Some(ListSlot::Wildcard));
    let length_ok = if open_ended {
        items.len() >= slots.len()
    } else {
        items.len() == slots.len()
    };
    if !length_ok {
        return None;
    }

    let mut bindings = Bindings::new();
    for (slot, item) in slots.iter().zip(items) {
        let ok = match slot {
            ListSlot::Wildcard => true,
            ListSlot::Literal(lit) => literal_matches(lit, item),
            ListSlot::Binder(binder) => {
                bindings.push(binder.clone(), item.clone());
                true
            }
            ListSlot::Cons(cons) => item
                .as_list()
                .is_some_and(|inner| bind_cons(cons, inner, &mut bindings)),
        };
        if !ok {
            return None;
        }
    }
    Some(bindings)
}
