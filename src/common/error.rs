//! Error handling for sqlforge

use thiserror::Error;

/// Main error type for sqlforge operations
#[derive(Error, Debug)]
pub enum SqlForgeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Type error: {0}")]
    Type(String),

    #[error("Console error: {0}")]
    Console(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SqlForgeError>;

/// Result type alias for sqlforge operations (alias for Result)
pub type SqlForgeResult<T> = std::result::Result<T, SqlForgeError>;

/// Macro for creating invalid argument errors
#[macro_export]
macro_rules! invalid_arg_err {
    ($msg:expr) => {
        $crate::common::error::SqlForgeError::InvalidArgument($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::SqlForgeError::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// Macro for creating internal errors
#[macro_export]
macro_rules! internal_err {
    ($msg:expr) => {
        $crate::common::error::SqlForgeError::Internal($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::SqlForgeError::Internal(format!($fmt, $($arg)*))
    };
}
