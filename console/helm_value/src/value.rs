//! The tagged value union and its type tags.

use std::fmt;

use crate::vector::Vector3;

/// Type tag for console values and parameter declarations.
///
/// The set is fixed. Argument binding is signature-directed: the declared
/// tag of a parameter selects the scan rule before its token is read, so
/// tags double as the binder's grammar selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Owned text.
    Str,
    /// 32-bit float.
    Float,
    /// Signed 32-bit integer.
    S32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    S64,
    /// Unsigned 64-bit integer. Serialized as fixed-width hex (`0x%016X`).
    U64,
    /// Boolean.
    Bool,
    /// Three-component float vector.
    Vector,
}

impl ValueType {
    /// Human-readable tag name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Str => "string",
            ValueType::Float => "float",
            ValueType::S32 => "s32",
            ValueType::U32 => "u32",
            ValueType::S64 => "s64",
            ValueType::U64 => "u64",
            ValueType::Bool => "bool",
            ValueType::Vector => "vector",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime console value: exactly one payload matching its tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Float(f32),
    S32(i32),
    U32(u32),
    S64(i64),
    U64(u64),
    Bool(bool),
    Vector(Vector3),
}

impl Value {
    /// Build a string value from anything string-like.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// The tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Str(_) => ValueType::Str,
            Value::Float(_) => ValueType::Float,
            Value::S32(_) => ValueType::S32,
            Value::U32(_) => ValueType::U32,
            Value::S64(_) => ValueType::S64,
            Value::U64(_) => ValueType::U64,
            Value::Bool(_) => ValueType::Bool,
            Value::Vector(_) => ValueType::Vector,
        }
    }

    /// Borrow the string payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The float payload, if this is a [`Value::Float`].
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The signed 32-bit payload, if this is a [`Value::S32`].
    pub fn as_s32(&self) -> Option<i32> {
        match self {
            Value::S32(v) => Some(*v),
            _ => None,
        }
    }

    /// The unsigned 32-bit payload, if this is a [`Value::U32`].
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::U32(v) => Some(*v),
            _ => None,
        }
    }

    /// The signed 64-bit payload, if this is a [`Value::S64`].
    pub fn as_s64(&self) -> Option<i64> {
        match self {
            Value::S64(v) => Some(*v),
            _ => None,
        }
    }

    /// The unsigned 64-bit payload, if this is a [`Value::U64`].
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The vector payload, if this is a [`Value::Vector`].
    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            Value::Vector(v) => Some(*v),
            _ => None,
        }
    }
}

/// Literal form of a value, as pushed onto the result stack.
///
/// Every tag except `U64` renders the obvious way. `U64` renders as
/// fixed-width hex (`0x%016X`): sender identities expand in that form and
/// must round-trip through `u64` parameters unchanged.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Float(v) => write!(f, "{v}"),
            Value::S32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::S64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "0x{v:016X}"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Vector(v) => write!(f, "{v}"),
        }
    }
}
