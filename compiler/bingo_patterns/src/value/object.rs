//! Nominal (type-tagged) objects.

use std::fmt;
use std::sync::Arc;

use super::Value;

/// A structured value with a declared type.
///
/// Type-tag patterns dispatch on [`type_name`](Self::type_name). The name
/// must be stable for the lifetime of the object.
pub trait Nominal: fmt::Debug + Send + Sync {
    /// Type identifier compared against `TypeTag` patterns.
    fn type_name(&self) -> &str;

    /// Produce the wrapped value.
    fn extract(&self) -> Value;
}

/// Shared handle to a [`Nominal`] object.
#[derive(Clone)]
pub struct ObjectValue(Arc<dyn Nominal>);

impl ObjectValue {
    pub(super) fn new(object: Arc<dyn Nominal>) -> Self {
        ObjectValue(object)
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    #[inline]
    pub fn extract(&self) -> Value {
        self.0.extract()
    }

    /// Identity comparison; objects have no structural equality.
    #[inline]
    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
