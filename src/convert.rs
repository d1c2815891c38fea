//! Conversion bridges: native dynamic values and statically shaped records.
//!
//! The native side is `serde_json::Value`, the ecosystem's lingua franca
//! for schema-free data. Records bounce through it: any `Serialize` type
//! can become a map and any `DeserializeOwned` type can be built from one,
//! with field naming controlled by the usual serde attributes
//! (`#[serde(rename)]`, `#[serde(rename_all = "snake_case")]`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as NativeValue;

use crate::error::{Error, Result};
use crate::map::JsonMap;
use crate::value::Value;

// ---------------------------------------------------------------------------
// Native bridge
// ---------------------------------------------------------------------------

impl JsonMap {
    /// Builds a map from a native JSON object, recursively.
    #[must_use]
    pub fn from_native(object: &serde_json::Map<String, NativeValue>) -> Self {
        let mut map = Self::new();
        for (k, v) in object {
            map.insert_mut(k.clone(), value_from_native(v));
        }
        map
    }

    /// Renders the map as a native JSON object, recursively.
    ///
    /// Lists of maps become lists of native objects. Non-finite floats
    /// degrade to native null (they have no JSON representation).
    #[must_use]
    pub fn to_native(&self) -> serde_json::Map<String, NativeValue> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), value_to_native(v)))
            .collect()
    }
}

fn value_from_native(v: &NativeValue) -> Value {
    match v {
        NativeValue::Null => Value::Null,
        NativeValue::Bool(b) => Value::Bool(*b),
        NativeValue::Number(n) => n
            .as_i64()
            .map(Value::Int)
            // Out-of-range unsigned integers widen to float.
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or(Value::Null),
        NativeValue::String(s) => Value::Str(s.clone()),
        NativeValue::Array(items) => Value::List(items.iter().map(value_from_native).collect()),
        NativeValue::Object(object) => Value::Map(JsonMap::from_native(object)),
    }
}

fn value_to_native(v: &Value) -> NativeValue {
    match v {
        Value::Null => NativeValue::Null,
        Value::Bool(b) => NativeValue::Bool(*b),
        Value::Int(i) => NativeValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f).map_or(NativeValue::Null, NativeValue::Number),
        Value::Str(s) => NativeValue::String(s.clone()),
        Value::List(items) => NativeValue::Array(items.iter().map(value_to_native).collect()),
        Value::Map(m) => NativeValue::Object(m.to_native()),
    }
}

// ---------------------------------------------------------------------------
// Record bridge
// ---------------------------------------------------------------------------

/// Converts a map into a statically shaped record.
///
/// # Errors
///
/// Returns [`Error::JsonParse`] when the map's shape does not match the
/// record (missing field, incompatible type).
pub fn to_record<T: DeserializeOwned>(map: &JsonMap) -> Result<T> {
    serde_json::from_value(NativeValue::Object(map.to_native()))
        .map_err(|e| Error::JsonParse(format!("failed to convert map to record: {e}")))
}

/// Converts a record into a map.
///
/// # Errors
///
/// Returns [`Error::ExpectedObject`] when the record does not serialize to
/// an object, or [`Error::JsonSerialize`] when it cannot be serialized.
pub fn from_record<T: Serialize>(record: &T) -> Result<JsonMap> {
    match serde_json::to_value(record).map_err(|e| Error::JsonSerialize(e.to_string()))? {
        NativeValue::Object(object) => Ok(JsonMap::from_native(&object)),
        _ => Err(Error::ExpectedObject),
    }
}
