//! Common utilities and error types shared across the crate

pub mod error;

pub use error::{Result, SqlForgeError, SqlForgeResult};
