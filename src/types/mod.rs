//! Type system module for sqlforge
//!
//! This module contains the core type system components:
//! - LogicalType: SQL-level type abstractions attached to bound values
//! - Value: Single value containers with type information
//! - TypeMap: Column name to type mapping used for binding type inference

pub mod logical_type;
pub mod type_map;
pub mod value;

// Re-export main types for convenience
pub use logical_type::LogicalType;
pub use type_map::TypeMap;
pub use value::Value;
