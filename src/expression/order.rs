//! ORDER BY terms

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, IdentifierExpression, ValueBinder};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// A single ORDER BY term: field plus direction
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpression {
    field: Box<ExpressionNode>,
    direction: OrderDirection,
}

impl OrderByExpression {
    pub fn new(field: &str, direction: OrderDirection) -> Self {
        Self::from_expr(IdentifierExpression::new(field), direction)
    }

    pub fn from_expr(field: impl Into<ExpressionNode>, direction: OrderDirection) -> Self {
        Self {
            field: Box::new(field.into()),
            direction,
        }
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction
    }
}

impl Expression for OrderByExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        Ok(format!(
            "{} {}",
            self.field.sql(binder)?,
            self.direction.as_str()
        ))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        visitor(&*self.field);
        self.field.traverse(visitor);
    }
}
