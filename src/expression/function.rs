//! SQL function call expressions
//!
//! A named function over an ordered argument list. Each argument is a raw
//! literal fragment, an identifier, a bound value, or a nested expression.

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};
use crate::types::{LogicalType, Value};

/// One ordered argument of a function call
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionArg {
    /// A bound value with its binding type
    Value(Value, LogicalType),
    /// A raw SQL fragment, inserted verbatim
    Literal(String),
    /// A column/table name, inserted verbatim
    Identifier(String),
    /// A nested expression
    Expr(ExpressionNode),
}

/// Named SQL function call over ordered arguments
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    name: String,
    args: Vec<FunctionArg>,
    return_type: LogicalType,
}

impl FunctionExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            return_type: LogicalType::Varchar,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn return_type(&self) -> &LogicalType {
        &self.return_type
    }

    pub fn returns(mut self, return_type: LogicalType) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn arg(mut self, arg: FunctionArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Append a bound value argument with an inferred binding type
    pub fn value(self, value: impl Into<Value>) -> Self {
        let value = value.into();
        let logical_type = value.get_type();
        self.arg(FunctionArg::Value(value, logical_type))
    }

    /// Append a bound value argument with an explicit binding type
    pub fn typed_value(self, value: impl Into<Value>, logical_type: LogicalType) -> Self {
        self.arg(FunctionArg::Value(value.into(), logical_type))
    }

    /// Append a raw literal fragment argument
    pub fn literal(self, fragment: impl Into<String>) -> Self {
        self.arg(FunctionArg::Literal(fragment.into()))
    }

    /// Append an identifier argument
    pub fn identifier(self, identifier: impl Into<String>) -> Self {
        self.arg(FunctionArg::Identifier(identifier.into()))
    }

    /// Append a nested expression argument
    pub fn expr(self, expr: impl Into<ExpressionNode>) -> Self {
        self.arg(FunctionArg::Expr(expr.into()))
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }
}

impl Expression for FunctionExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let mut parts = Vec::with_capacity(self.args.len());
        for arg in &self.args {
            let part = match arg {
                FunctionArg::Value(value, logical_type) => {
                    binder.bind_value(value.clone(), Some(logical_type.clone()), "param")
                }
                FunctionArg::Literal(fragment) => fragment.clone(),
                FunctionArg::Identifier(identifier) => identifier.clone(),
                FunctionArg::Expr(expr) => expr.sql(binder)?,
            };
            parts.push(part);
        }
        Ok(format!("{}({})", self.name, parts.join(", ")))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        for arg in &self.args {
            if let FunctionArg::Expr(expr) = arg {
                visitor(expr);
                expr.traverse(visitor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_sql() {
        let mut binder = ValueBinder::new();
        let expr = FunctionExpression::new("CONCAT")
            .identifier("title")
            .value(" - ")
            .identifier("author");
        assert_eq!(
            expr.sql(&mut binder).unwrap(),
            "CONCAT(title, :param0, author)"
        );
        assert_eq!(binder.bindings()[0].value, Value::from(" - "));
    }

    #[test]
    fn test_no_args() {
        let mut binder = ValueBinder::new();
        let expr = FunctionExpression::new("NOW").returns(LogicalType::Timestamp);
        assert_eq!(expr.sql(&mut binder).unwrap(), "NOW()");
        assert_eq!(expr.return_type(), &LogicalType::Timestamp);
    }
}
