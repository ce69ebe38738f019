//! Unary expressions
//!
//! An operator applied to a single operand, printed either before the
//! parenthesized operand (`NOT (...)`) or after it (`(...) IS NULL`).

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};

/// Operator position relative to the operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryPosition {
    Prefix,
    Postfix,
}

/// Operator + single operand + position
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    operator: String,
    operand: Box<ExpressionNode>,
    position: UnaryPosition,
}

impl UnaryExpression {
    pub fn new(
        operator: impl Into<String>,
        operand: impl Into<ExpressionNode>,
        position: UnaryPosition,
    ) -> Self {
        Self {
            operator: operator.into(),
            operand: Box::new(operand.into()),
            position,
        }
    }

    /// `OP (operand)` form, e.g. NOT, EXISTS
    pub fn prefix(operator: impl Into<String>, operand: impl Into<ExpressionNode>) -> Self {
        Self::new(operator, operand, UnaryPosition::Prefix)
    }

    /// `(operand) OP` form, e.g. IS NULL
    pub fn postfix(operator: impl Into<String>, operand: impl Into<ExpressionNode>) -> Self {
        Self::new(operator, operand, UnaryPosition::Postfix)
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn position(&self) -> UnaryPosition {
        self.position
    }
}

impl Expression for UnaryExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let operand = self.operand.sql(binder)?;
        match self.position {
            UnaryPosition::Prefix => Ok(format!("{} ({})", self.operator, operand)),
            UnaryPosition::Postfix => Ok(format!("({}) {}", operand, self.operator)),
        }
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        visitor(&*self.operand);
        self.operand.traverse(visitor);
    }
}
