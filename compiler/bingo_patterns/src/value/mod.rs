//! Runtime values matched by patterns.
//!
//! # Arc Enforcement
//!
//! Strings and lists live behind [`Heap`], whose constructor is private to
//! this module. Build values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let list = Value::list(vec![Value::int(1), Value::int(2)]);
//! let io = Value::object(Io::of(Value::int(12)));
//! ```
//!
//! # Shapes
//!
//! Matching only cares about three shapes ([`ValueShape`]): scalars,
//! sequences and nominal objects. The shape is computed once per match
//! attempt and switched on exhaustively.

mod heap;
mod object;

use std::fmt;
use std::sync::Arc;

pub use heap::Heap;
pub use object::{Nominal, ObjectValue};

/// Runtime value.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    /// Structured value with a declared type.
    Object(ObjectValue),
}

/// How a value can be matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// `Null`, `Bool`, `Int`, `Float`, `Str`
    Scalar,
    /// `List`
    Sequence,
    /// `Object`
    Nominal,
}

impl ValueShape {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueShape::Scalar => "scalar",
            ValueShape::Sequence => "sequence",
            ValueShape::Nominal => "nominal",
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Wrap a nominal object.
    #[inline]
    pub fn object(object: impl Nominal + 'static) -> Self {
        Value::Object(ObjectValue::new(Arc::new(object)))
    }

    /// Wrap an already shared nominal object.
    #[inline]
    pub fn shared_object(object: Arc<dyn Nominal>) -> Self {
        Value::Object(ObjectValue::new(object))
    }
}

// Value Methods

impl Value {
    pub fn shape(&self) -> ValueShape {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                ValueShape::Scalar
            }
            Value::List(_) => ValueShape::Sequence,
            Value::Object(_) => ValueShape::Nominal,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Type name for error messages. Objects report their declared type.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Object(obj) => obj.type_name(),
        }
    }

    /// Display value for user output (strings without quotes).
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => f.debug_list().entries(items.iter()).finish(),
            Value::Object(obj) => write!(f, "Object({obj:?})"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "\"{}\"", s.escape_default()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "<{}>", obj.type_name()),
        }
    }
}

/// Structural equality; objects compare by identity. Floats compare
/// exactly (`NaN` is unequal to itself).
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "value equality is exact, like f64's own")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::list(iter.into_iter().collect())
    }
}
