//! Dynamically typed payload values.
//!
//! Every value stored in a map is normalized to one of seven canonical
//! shapes: null, bool, 64-bit signed integer, 64-bit float, text, list,
//! or nested map. Normalization happens at the type level: the `From`
//! conversions widen every native integer width to [`Value::Int`] and both
//! float widths to [`Value::Float`], so a constructed `Value` is always
//! canonical.

use crate::map::JsonMap;

/// Absolute tolerance for float comparison.
const FLOAT_TOLERANCE: f64 = 1e-4;

/// A JSON-compatible payload value.
#[derive(Debug, Clone)]
pub enum Value {
    /// JSON null.
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer. All native integer widths widen to this.
    Int(i64),
    /// 64-bit float. `f32` widens to this.
    Float(f64),
    /// Text.
    Str(String),
    /// Ordered list of payloads.
    List(Vec<Value>),
    /// Nested map.
    Map(JsonMap),
}

impl Value {
    /// Name of this value's type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns `true` if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Recursive semantic equality.
    ///
    /// Values of different types are never equal; in particular `Int` and
    /// `Float` are distinct. Floats compare with an absolute tolerance of
    /// `1e-4`. Lists compare pairwise, maps recurse.
    #[must_use]
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => (a - b).abs() <= FLOAT_TOLERANCE,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => list_equals(a, b),
            (Value::Map(a), Value::Map(b)) => a.equals(b),
            _ => false,
        }
    }
}

/// Pairwise list equality under [`Value::equals`].
#[must_use]
pub fn list_equals(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
}

// ---------------------------------------------------------------------------
// Normalizing conversions
// ---------------------------------------------------------------------------

macro_rules! int_conversions {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )+
    };
}

// Unsigned 64-bit values reinterpret as i64; the canonical integer type is
// 64 bits wide and signed.
int_conversions!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<JsonMap> for Value {
    fn from(v: JsonMap) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
