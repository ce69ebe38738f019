//! sqlforge - Composable SQL Expression Builder
//!
//! sqlforge provides a composable AST of SQL statement fragments. Expression
//! trees are built bottom-up through builder methods, then compiled to
//! parameterized SQL strings by a single `sql(binder)` call that registers
//! every bound value into a value binder, keeping raw values out of the
//! compiled text. A small console subsystem models already-parsed command
//! input and option/argument descriptors with help, usage and XML rendering.

pub mod common;
pub mod console;
pub mod expression;
pub mod types;

// Re-export common types for convenience
pub use common::{Result, SqlForgeError};

// Re-export type system for convenience
pub use types::{LogicalType, TypeMap, Value};

// Re-export expression system for convenience
pub use expression::{
    AggregateExpression, BetweenExpression, Binding, BoundValueExpression,
    CaseStatementExpression, CommonTableExpression, ComparisonExpression, ComparisonValue,
    Condition, Conjunction, Expression, ExpressionNode, FunctionArg, FunctionExpression,
    IdentifierExpression, Materialized, OrderByExpression, OrderDirection, QueryExpression,
    RawExpression, UnaryExpression, UnaryPosition, ValueBinder, ValuesExpression,
    WindowExpression, WindowFrame, WindowFrameBound, WindowFrameExclusion, WindowFrameType,
};

// Re-export console system for convenience
pub use console::{Arguments, ConsoleInputArgument, ConsoleInputOption, OptionValue};
