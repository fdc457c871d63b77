//! Arity analysis: how many values a pattern binds, and in which order.
//!
//! The order is left-to-right textual order, which is also the order in
//! which the matcher pushes bindings. Handlers receive their arguments in
//! this order.

use crate::{Binder, ConsPattern, ListSlot, MatchPattern, Tail};

impl ConsPattern {
    /// `heads + 1` when the tail is a binder, `heads` otherwise.
    pub fn arity(&self) -> usize {
        let tail = usize::from(matches!(self.tail, Tail::Binder(_)));
        self.heads.len() + tail
    }

    fn collect_binders<'a>(&'a self, out: &mut Vec<&'a Binder>) {
        out.extend(self.heads.iter());
        if let Tail::Binder(b) = &self.tail {
            out.push(b);
        }
    }
}

impl ListSlot {
    pub fn arity(&self) -> usize {
        match self {
            ListSlot::Binder(_) => 1,
            ListSlot::Cons(cons) => cons.arity(),
            ListSlot::Literal(_) | ListSlot::Wildcard => 0,
        }
    }
}

impl MatchPattern {
    /// Number of values bound on a successful match.
    ///
    /// Type tags bind nothing by themselves; see
    /// [`arity_with_subject`](Self::arity_with_subject).
    pub fn arity(&self) -> usize {
        match self {
            MatchPattern::Wildcard | MatchPattern::Literal(_) | MatchPattern::TypeTag(_) => 0,
            MatchPattern::Cons(cons) => cons.arity(),
            MatchPattern::List(slots) => slots.iter().map(ListSlot::arity).sum(),
        }
    }

    /// Arity when the caller asks for the matched value itself.
    ///
    /// Only type tags hand out the matched object; every other form ignores
    /// the request.
    pub fn arity_with_subject(&self, wants_subject: bool) -> usize {
        match self {
            MatchPattern::TypeTag(_) if wants_subject => 1,
            _ => self.arity(),
        }
    }

    /// Binder names in binding order.
    pub fn binders(&self) -> Vec<&Binder> {
        let mut out = Vec::with_capacity(self.arity());
        match self {
            MatchPattern::Cons(cons) => cons.collect_binders(&mut out),
            MatchPattern::List(slots) => {
                for slot in slots {
                    match slot {
                        ListSlot::Binder(b) => out.push(b),
                        ListSlot::Cons(cons) => cons.collect_binders(&mut out),
                        ListSlot::Literal(_) | ListSlot::Wildcard => {}
                    }
                }
            }
            MatchPattern::Wildcard | MatchPattern::Literal(_) | MatchPattern::TypeTag(_) => {}
        }
        out
    }
}
