//! The dynamic value threaded through `prefix_core::dynamic` pipelines.

use std::fmt;
use std::result;
use std::sync::Arc;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number};

use crate::coercion::format_number;
use crate::{CombinatorError, Method, Record, Result, ValueKind};

/// A scalar, record or method.
///
/// `PartialEq` is structural for scalars and records (`NaN` is unequal to
/// itself); methods compare by identity.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(Arc<str>),
    Record(Record),
    Method(Method),
}

impl Value {
    pub fn text(s: impl Into<Arc<str>>) -> Self {
        Value::Text(s.into())
    }

    pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Value::Record(Record::from_fields(fields))
    }

    pub fn method<F>(f: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Value::Method(Method::new(f))
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Record(_) => ValueKind::Record,
            Value::Method(_) => ValueKind::Method,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(m) => Some(m),
            _ => None,
        }
    }

    /// Convert to JSON. Fails on methods, anywhere in the tree.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::Value::try_from(self.clone())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Method(a), Value::Method(b)) => Method::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Textual form used by `toString` and `concat`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Record(_) => f.write_str("[object Object]"),
            Value::Method(_) => f.write_str("[method]"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Value::Text(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Method> for Value {
    fn from(value: Method) -> Self {
        Value::Method(value)
    }
}

impl TryFrom<Value> for f64 {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_number()
            .ok_or_else(|| CombinatorError::mismatch("coerce", "a number", value.kind()))
    }
}

impl TryFrom<Value> for bool {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| CombinatorError::mismatch("coerce", "a bool", value.kind()))
    }
}

impl TryFrom<Value> for String {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s.to_string()),
            other => Err(CombinatorError::mismatch("coerce", "a text", other.kind())),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Record(r) => Ok(r),
            other => Err(CombinatorError::mismatch("coerce", "a record", other.kind())),
        }
    }
}

impl TryFrom<Value> for Method {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Method(m) => Ok(m),
            other => Err(CombinatorError::mismatch("coerce", "a method", other.kind())),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = CombinatorError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(_) => {
                return Err(CombinatorError::NotRepresentable { what: "array" });
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<Record>>()?,
            ),
        })
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = CombinatorError;

    fn try_from(value: Value) -> Result<Self> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            // JSON has no NaN or infinities; mirror `JSON.stringify` and emit null.
            Value::Number(n) => {
                Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Text(s) => serde_json::Value::String(s.to_string()),
            Value::Record(r) => {
                let mut map = Map::new();
                for (k, v) in &r {
                    map.insert(k.to_string(), serde_json::Value::try_from(v.clone())?);
                }
                serde_json::Value::Object(map)
            }
            Value::Method(_) => return Err(CombinatorError::NotRepresentable { what: "method" }),
        })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Record(r) => {
                let mut map = serializer.serialize_map(Some(r.len()))?;
                for (k, v) in r {
                    map.serialize_entry(&**k, v)?;
                }
                map.end()
            }
            Value::Method(_) => Err(ser::Error::custom(CombinatorError::NotRepresentable {
                what: "method",
            })),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Value::try_from(json).map_err(de::Error::custom)
    }
}
