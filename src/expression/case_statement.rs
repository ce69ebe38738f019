//! CASE expressions
//!
//! Supports both the searched form (`CASE WHEN cond THEN r … END`) and the
//! simple form with a base operand (`CASE op WHEN v THEN r … END`). Results
//! and operands given as plain values are bound through the value binder.

use crate::common::error::{Result, SqlForgeError};
use crate::expression::{Expression, ExpressionNode, ValueBinder};

/// Ordered (condition, result) pairs plus optional operand and ELSE
#[derive(Debug, Clone, PartialEq)]
pub struct CaseStatementExpression {
    operand: Option<Box<ExpressionNode>>,
    whens: Vec<(ExpressionNode, ExpressionNode)>,
    else_result: Option<Box<ExpressionNode>>,
}

impl Default for CaseStatementExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseStatementExpression {
    /// Searched CASE: conditions are full boolean expressions
    pub fn new() -> Self {
        Self {
            operand: None,
            whens: Vec::new(),
            else_result: None,
        }
    }

    /// Simple CASE: WHEN values are compared against the operand
    pub fn with_operand(operand: impl Into<ExpressionNode>) -> Self {
        Self {
            operand: Some(Box::new(operand.into())),
            whens: Vec::new(),
            else_result: None,
        }
    }

    /// Append one WHEN … THEN … branch
    pub fn when_then(
        mut self,
        when: impl Into<ExpressionNode>,
        then: impl Into<ExpressionNode>,
    ) -> Self {
        self.whens.push((when.into(), then.into()));
        self
    }

    /// Set the ELSE result, replacing any previous one
    pub fn else_result(mut self, result: impl Into<ExpressionNode>) -> Self {
        self.else_result = Some(Box::new(result.into()));
        self
    }

    pub fn branch_count(&self) -> usize {
        self.whens.len()
    }
}

impl Expression for CaseStatementExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        if self.whens.is_empty() {
            return Err(SqlForgeError::InvalidValue(
                "case expression requires at least one WHEN branch".to_string(),
            ));
        }

        let mut sql = String::from("CASE");
        if let Some(operand) = &self.operand {
            sql.push(' ');
            sql.push_str(&operand.sql(binder)?);
        }
        for (when, then) in &self.whens {
            sql.push_str(&format!(
                " WHEN {} THEN {}",
                when.sql(binder)?,
                then.sql(binder)?
            ));
        }
        if let Some(else_result) = &self.else_result {
            sql.push_str(&format!(" ELSE {}", else_result.sql(binder)?));
        }
        sql.push_str(" END");
        Ok(sql)
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        if let Some(operand) = &self.operand {
            visitor(&**operand);
            operand.traverse(visitor);
        }
        for (when, then) in &self.whens {
            visitor(when);
            when.traverse(visitor);
            visitor(then);
            then.traverse(visitor);
        }
        if let Some(else_result) = &self.else_result {
            visitor(&**else_result);
            else_result.traverse(visitor);
        }
    }
}
