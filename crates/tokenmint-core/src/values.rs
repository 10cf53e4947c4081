//! Dynamically-typed option values.
//!
//! Name-based setters accept an [`OptionValue`] so that the declared type of
//! each option can be checked at runtime and reported in error messages.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A value passed to a name-based option setter.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    /// Epoch seconds when used for a timestamp option.
    Integer(i64),
    Instant(DateTime<Utc>),
    Text(String),
    Null,
}

impl OptionValue {
    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "int",
            Self::Instant(_) => "DateTime",
            Self::Text(_) => "string",
            Self::Null => "null",
        }
    }
}

/// Type name of a JSON value, matching [`OptionValue::type_name`] where the
/// two overlap.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<DateTime<Utc>> for OptionValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Instant(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
