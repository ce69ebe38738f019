//! Comparison expressions
//!
//! A field / operator / value triple. The right-hand side is either a single
//! bound value, a bound list (IN / NOT IN, one placeholder per element), or
//! a nested expression such as another identifier or a sub-query fragment.

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};
use crate::invalid_arg_err;
use crate::types::{LogicalType, Value};

/// Right-hand side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonValue {
    /// A single bound value with its binding type
    Bound(Value, LogicalType),
    /// A list of bound values, one placeholder per element
    Many(Vec<Value>, LogicalType),
    /// A nested expression, inserted as compiled SQL
    Expr(Box<ExpressionNode>),
}

/// Field / operator / value triple
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpression {
    field: Box<ExpressionNode>,
    value: ComparisonValue,
    operator: String,
}

impl ComparisonExpression {
    /// Comparison against a single bound value
    ///
    /// A null value is rejected: `field = NULL` never matches, the caller
    /// has to say IS NULL / IS NOT NULL explicitly.
    pub fn new(
        field: impl Into<ExpressionNode>,
        value: Value,
        logical_type: Option<LogicalType>,
        operator: impl Into<String>,
    ) -> Result<Self> {
        let operator = operator.into().to_uppercase();
        if value.is_null() {
            return Err(invalid_arg_err!(
                "cannot use `NULL` value with comparison operator `{}`; use IS NULL or IS NOT NULL instead",
                operator
            ));
        }
        let logical_type = logical_type.unwrap_or_else(|| value.get_type());
        Ok(Self {
            field: Box::new(field.into()),
            value: ComparisonValue::Bound(value, logical_type),
            operator,
        })
    }

    /// Comparison against a list of bound values (IN / NOT IN)
    pub fn many(
        field: impl Into<ExpressionNode>,
        values: Vec<Value>,
        element_type: Option<LogicalType>,
        operator: impl Into<String>,
    ) -> Result<Self> {
        if values.is_empty() {
            return Err(invalid_arg_err!(
                "an IN comparison requires at least one value"
            ));
        }
        let element_type = element_type
            .unwrap_or_else(|| values.first().map(|v| v.get_type()).unwrap_or(LogicalType::Null));
        Ok(Self {
            field: Box::new(field.into()),
            value: ComparisonValue::Many(values, element_type),
            operator: operator.into().to_uppercase(),
        })
    }

    /// Comparison against another expression, e.g. a field-to-field equality
    pub fn with_expr(
        field: impl Into<ExpressionNode>,
        value: impl Into<ExpressionNode>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            field: Box::new(field.into()),
            value: ComparisonValue::Expr(Box::new(value.into())),
            operator: operator.into().to_uppercase(),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &ComparisonValue {
        &self.value
    }
}

impl Expression for ComparisonExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let field = self.field.sql(binder)?;
        let rhs = match &self.value {
            ComparisonValue::Bound(value, logical_type) => {
                binder.bind_value(value.clone(), Some(logical_type.clone()), "c")
            }
            ComparisonValue::Many(values, element_type) => {
                let placeholders: Vec<String> = values
                    .iter()
                    .map(|v| binder.bind_value(v.clone(), Some(element_type.clone()), "c"))
                    .collect();
                format!("({})", placeholders.join(", "))
            }
            ComparisonValue::Expr(expr) => expr.sql(binder)?,
        };
        Ok(format!("{} {} {}", field, self.operator, rhs))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        visitor(&*self.field);
        self.field.traverse(visitor);
        if let ComparisonValue::Expr(expr) = &self.value {
            visitor(&**expr);
            expr.traverse(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::IdentifierExpression;

    #[test]
    fn test_bound_comparison() {
        let mut binder = ValueBinder::new();
        let expr = ComparisonExpression::new(
            IdentifierExpression::new("id"),
            Value::Integer(7),
            None,
            "=",
        )
        .unwrap();
        assert_eq!(expr.sql(&mut binder).unwrap(), "id = :c0");
        assert_eq!(binder.bindings()[0].value, Value::Integer(7));
    }

    #[test]
    fn test_null_value_is_rejected() {
        let result = ComparisonExpression::new(
            IdentifierExpression::new("status"),
            Value::Null,
            None,
            "=",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_in_list() {
        let mut binder = ValueBinder::new();
        let expr = ComparisonExpression::many(
            IdentifierExpression::new("id"),
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)],
            None,
            "in",
        )
        .unwrap();
        assert_eq!(expr.sql(&mut binder).unwrap(), "id IN (:c0, :c1, :c2)");
        assert_eq!(binder.len(), 3);
    }

    #[test]
    fn test_empty_in_list_is_rejected() {
        let result =
            ComparisonExpression::many(IdentifierExpression::new("id"), vec![], None, "in");
        assert!(result.is_err());
    }

    #[test]
    fn test_field_to_field() {
        let mut binder = ValueBinder::new();
        let expr = ComparisonExpression::with_expr(
            IdentifierExpression::new("a.id"),
            IdentifierExpression::new("b.id"),
            "=",
        );
        assert_eq!(expr.sql(&mut binder).unwrap(), "a.id = b.id");
        assert!(binder.is_empty());
    }
}
