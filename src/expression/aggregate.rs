//! Aggregate expressions
//!
//! An `AggregateExpression` decorates a function call with an optional
//! FILTER conjunction and an OVER window. The window is created lazily on
//! the first partition/order/frame call, so plain aggregates stay plain.

use crate::common::error::Result;
use crate::expression::{
    Condition, Expression, ExpressionNode, FunctionExpression, OrderDirection, QueryExpression,
    ValueBinder, WindowExpression, WindowFrameBound, WindowFrameType,
};
use crate::types::{LogicalType, Value};

/// Function call decorated with FILTER and OVER clauses
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpression {
    function: FunctionExpression,
    filter: Option<QueryExpression>,
    window: Option<WindowExpression>,
}

impl AggregateExpression {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_function(FunctionExpression::new(name))
    }

    pub fn from_function(function: FunctionExpression) -> Self {
        Self {
            function,
            filter: None,
            window: None,
        }
    }

    pub fn function(&self) -> &FunctionExpression {
        &self.function
    }

    pub fn window(&self) -> Option<&WindowExpression> {
        self.window.as_ref()
    }

    pub fn filter_expression(&self) -> Option<&QueryExpression> {
        self.filter.as_ref()
    }

    /// Append a bound value argument
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.function = self.function.value(value);
        self
    }

    /// Append an identifier argument
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.function = self.function.identifier(identifier);
        self
    }

    /// Append a raw literal fragment argument
    pub fn literal(mut self, fragment: impl Into<String>) -> Self {
        self.function = self.function.literal(fragment);
        self
    }

    /// Append a nested expression argument
    pub fn expr(mut self, expr: impl Into<ExpressionNode>) -> Self {
        self.function = self.function.expr(expr);
        self
    }

    pub fn returns(mut self, return_type: LogicalType) -> Self {
        self.function = self.function.returns(return_type);
        self
    }

    /// Install or extend the FILTER (WHERE …) conjunction
    pub fn filter(mut self, conditions: Vec<Condition>) -> Result<Self> {
        let filter = self.filter.take().unwrap_or_default();
        self.filter = Some(filter.add(conditions)?);
        Ok(self)
    }

    /// Attach an OVER clause, optionally referencing a named window
    pub fn over(mut self, name: Option<&str>) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(match name {
            Some(name) => window.with_name(name),
            None => window,
        });
        self
    }

    /// Partition the window by a column, creating the window if needed
    pub fn partition(mut self, field: &str) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.partition(field));
        self
    }

    pub fn partition_expr(mut self, expr: impl Into<ExpressionNode>) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.partition_expr(expr));
        self
    }

    /// Order the window by a column, creating the window if needed
    pub fn order_by(mut self, field: &str, direction: OrderDirection) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.order_by(field, direction));
        self
    }

    pub fn rows(mut self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.rows(start, end));
        self
    }

    pub fn range(mut self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.range(start, end));
        self
    }

    pub fn groups(mut self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.groups(start, end));
        self
    }

    pub fn frame(
        mut self,
        frame_type: WindowFrameType,
        start: WindowFrameBound,
        end: Option<WindowFrameBound>,
    ) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.frame(frame_type, start, end));
        self
    }

    pub fn exclude_current(mut self) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.exclude_current());
        self
    }

    pub fn exclude_group(mut self) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.exclude_group());
        self
    }

    pub fn exclude_ties(mut self) -> Self {
        let window = self.window.take().unwrap_or_default();
        self.window = Some(window.exclude_ties());
        self
    }
}

impl Expression for AggregateExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let mut sql = self.function.sql(binder)?;

        if let Some(filter) = &self.filter {
            if !filter.is_empty() {
                sql.push_str(&format!(" FILTER (WHERE {})", filter.sql(binder)?));
            }
        }

        if let Some(window) = &self.window {
            if window.is_named_only() {
                sql.push_str(&format!(" OVER {}", window.sql(binder)?));
            } else {
                sql.push_str(&format!(" OVER ({})", window.sql(binder)?));
            }
        }

        Ok(sql)
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        self.function.traverse(visitor);
        if let Some(filter) = &self.filter {
            visitor(filter);
            filter.traverse(visitor);
        }
        if let Some(window) = &self.window {
            visitor(window);
            window.traverse(visitor);
        }
    }
}
