use crate::common::error::{Result, SqlForgeError};
use crate::types::logical_type::LogicalType;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single value destined for parameter binding, with type information
/// Values are never embedded into compiled SQL; they travel through the value binder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null value (type is stored separately)
    Null,
    /// Boolean value
    Boolean(bool),
    /// 8-bit signed integer
    TinyInt(i8),
    /// 16-bit signed integer
    SmallInt(i16),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    BigInt(i64),
    /// 32-bit floating point
    Float(f32),
    /// 64-bit double precision
    Double(f64),
    /// String value
    Varchar(String),
    /// Decimal value
    Decimal(Decimal),
    /// Date value
    Date(NaiveDate),
    /// Time value
    Time(NaiveTime),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// JSON document stored as its serialized text
    Json(String),
    /// Binary data
    Blob(Vec<u8>),
    /// List value (multiple-valued binding, one placeholder per element)
    List(Vec<Value>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the logical type of this value
    pub fn get_type(&self) -> LogicalType {
        match self {
            Value::Null => LogicalType::Null,
            Value::Boolean(_) => LogicalType::Boolean,
            Value::TinyInt(_) => LogicalType::TinyInt,
            Value::SmallInt(_) => LogicalType::SmallInt,
            Value::Integer(_) => LogicalType::Integer,
            Value::BigInt(_) => LogicalType::BigInt,
            Value::Float(_) => LogicalType::Float,
            Value::Double(_) => LogicalType::Double,
            Value::Varchar(_) => LogicalType::Varchar,
            Value::Decimal(d) => LogicalType::Decimal {
                precision: 38,
                scale: d.scale() as u8,
            },
            Value::Date(_) => LogicalType::Date,
            Value::Time(_) => LogicalType::Time,
            Value::Timestamp(_) => LogicalType::Timestamp,
            Value::Json(_) => LogicalType::Json,
            Value::Blob(_) => LogicalType::Blob,
            Value::List(values) => {
                let element = values
                    .first()
                    .map(|v| v.get_type())
                    .unwrap_or(LogicalType::Null);
                LogicalType::List(Box::new(element))
            }
        }
    }

    /// Create a validated JSON value from serialized text
    pub fn json(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        serde_json::from_str::<serde_json::Value>(&text)
            .map_err(|e| SqlForgeError::Serialization(format!("invalid JSON value: {}", e)))?;
        Ok(Value::Json(text))
    }

    /// Build a value from parsed JSON, mapping scalars and arrays onto
    /// the closest SQL value and keeping objects as serialized JSON
    pub fn from_json(text: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| SqlForgeError::Serialization(format!("invalid JSON value: {}", e)))?;
        Ok(Self::from_json_value(parsed))
    }

    fn from_json_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::BigInt(i)
                } else {
                    Value::Double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Varchar(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Self::from_json_value).collect())
            }
            object @ serde_json::Value::Object(_) => Value::Json(object.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::TinyInt(v) => write!(f, "{}", v),
            Value::SmallInt(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::BigInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Varchar(s) => write!(f, "{}", s),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Json(s) => write!(f, "{}", s),
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
            Value::List(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::TinyInt(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::SmallInt(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Varchar(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Varchar(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
