//! BETWEEN expressions

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};
use crate::types::{LogicalType, Value};

/// Field + from + to bounds, optionally typed
///
/// Compiles to `field BETWEEN :c0 AND :c1` with both bounds bound through
/// the value binder under the declared or inferred type.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenExpression {
    field: Box<ExpressionNode>,
    from: Value,
    to: Value,
    logical_type: LogicalType,
}

impl BetweenExpression {
    pub fn new(
        field: impl Into<ExpressionNode>,
        from: Value,
        to: Value,
        logical_type: Option<LogicalType>,
    ) -> Self {
        let logical_type = logical_type.unwrap_or_else(|| from.get_type());
        Self {
            field: Box::new(field.into()),
            from,
            to,
            logical_type,
        }
    }

    pub fn logical_type(&self) -> &LogicalType {
        &self.logical_type
    }
}

impl Expression for BetweenExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let field = self.field.sql(binder)?;
        let from = binder.bind_value(self.from.clone(), Some(self.logical_type.clone()), "c");
        let to = binder.bind_value(self.to.clone(), Some(self.logical_type.clone()), "c");
        Ok(format!("{} BETWEEN {} AND {}", field, from, to))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        visitor(&*self.field);
        self.field.traverse(visitor);
    }
}
