use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical types represent the SQL-level semantic types attached to bound values
/// A column mapped to a `List` type is treated as multiple-valued, which turns
/// bare equality comparisons into IN / NOT IN over the element type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    /// NULL type
    Null,
    /// Boolean type (TRUE/FALSE)
    Boolean,
    /// 8-bit signed integer
    TinyInt,
    /// 16-bit signed integer
    SmallInt,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    BigInt,
    /// 32-bit floating point
    Float,
    /// 64-bit double precision
    Double,
    /// Variable length string
    Varchar,
    /// Decimal with precision and scale
    Decimal { precision: u8, scale: u8 },
    /// Date value
    Date,
    /// Time value
    Time,
    /// Timestamp value
    Timestamp,
    /// JSON type
    Json,
    /// Binary large object
    Blob,
    /// List/array type with element type (multiple-valued column)
    List(Box<LogicalType>),
    /// Invalid/unknown type
    Invalid,
}

impl LogicalType {
    /// Check whether this type marks a multiple-valued (list) column
    pub fn is_multiple(&self) -> bool {
        matches!(self, LogicalType::List(_))
    }

    /// Get the element type of a list type, or the type itself for scalars
    pub fn element_type(&self) -> &LogicalType {
        match self {
            LogicalType::List(inner) => inner,
            other => other,
        }
    }

    /// Check if this type is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LogicalType::TinyInt
                | LogicalType::SmallInt
                | LogicalType::Integer
                | LogicalType::BigInt
                | LogicalType::Float
                | LogicalType::Double
                | LogicalType::Decimal { .. }
        )
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Null => write!(f, "NULL"),
            LogicalType::Boolean => write!(f, "BOOLEAN"),
            LogicalType::TinyInt => write!(f, "TINYINT"),
            LogicalType::SmallInt => write!(f, "SMALLINT"),
            LogicalType::Integer => write!(f, "INTEGER"),
            LogicalType::BigInt => write!(f, "BIGINT"),
            LogicalType::Float => write!(f, "FLOAT"),
            LogicalType::Double => write!(f, "DOUBLE"),
            LogicalType::Varchar => write!(f, "VARCHAR"),
            LogicalType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            LogicalType::Date => write!(f, "DATE"),
            LogicalType::Time => write!(f, "TIME"),
            LogicalType::Timestamp => write!(f, "TIMESTAMP"),
            LogicalType::Json => write!(f, "JSON"),
            LogicalType::Blob => write!(f, "BLOB"),
            LogicalType::List(inner) => write!(f, "{}[]", inner),
            LogicalType::Invalid => write!(f, "INVALID"),
        }
    }
}
