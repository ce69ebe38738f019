//! Expression system for sqlforge
//!
//! This module provides the composable expression tree used to assemble SQL
//! statement fragments. Expressions are built bottom-up through builder
//! methods, composed into parent expressions, and terminally consumed by a
//! single `sql(binder)` call that serializes the tree while registering every
//! bound value into a value binder.

pub mod aggregate;
pub mod between;
pub mod binder;
pub mod case_statement;
pub mod comparison;
pub mod cte;
pub mod function;
pub mod identifier;
pub mod order;
pub mod query;
pub mod unary;
pub mod values;
pub mod window;

pub use aggregate::*;
pub use between::*;
pub use binder::*;
pub use case_statement::*;
pub use comparison::*;
pub use cte::*;
pub use function::*;
pub use identifier::*;
pub use order::*;
pub use query::*;
pub use unary::*;
pub use values::*;
pub use window::*;

use crate::common::error::Result;
use crate::types::{LogicalType, Value};

/// Expression trait that all expressions must implement
pub trait Expression: std::fmt::Debug {
    /// Compile this expression to a SQL fragment, registering bound values
    /// into the binder
    fn sql(&self, binder: &mut ValueBinder) -> Result<String>;

    /// Visit each direct child exactly once and recurse into it
    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression));
}

/// Expression enum that encompasses all expression types
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Query(QueryExpression),
    Comparison(ComparisonExpression),
    Between(BetweenExpression),
    Unary(UnaryExpression),
    Function(FunctionExpression),
    Aggregate(AggregateExpression),
    Window(WindowExpression),
    Identifier(IdentifierExpression),
    Case(CaseStatementExpression),
    Values(ValuesExpression),
    Cte(CommonTableExpression),
    OrderBy(OrderByExpression),
    Bound(BoundValueExpression),
    Raw(RawExpression),
}

impl Expression for ExpressionNode {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        match self {
            ExpressionNode::Query(expr) => expr.sql(binder),
            ExpressionNode::Comparison(expr) => expr.sql(binder),
            ExpressionNode::Between(expr) => expr.sql(binder),
            ExpressionNode::Unary(expr) => expr.sql(binder),
            ExpressionNode::Function(expr) => expr.sql(binder),
            ExpressionNode::Aggregate(expr) => expr.sql(binder),
            ExpressionNode::Window(expr) => expr.sql(binder),
            ExpressionNode::Identifier(expr) => expr.sql(binder),
            ExpressionNode::Case(expr) => expr.sql(binder),
            ExpressionNode::Values(expr) => expr.sql(binder),
            ExpressionNode::Cte(expr) => expr.sql(binder),
            ExpressionNode::OrderBy(expr) => expr.sql(binder),
            ExpressionNode::Bound(expr) => expr.sql(binder),
            ExpressionNode::Raw(expr) => expr.sql(binder),
        }
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        match self {
            ExpressionNode::Query(expr) => expr.traverse(visitor),
            ExpressionNode::Comparison(expr) => expr.traverse(visitor),
            ExpressionNode::Between(expr) => expr.traverse(visitor),
            ExpressionNode::Unary(expr) => expr.traverse(visitor),
            ExpressionNode::Function(expr) => expr.traverse(visitor),
            ExpressionNode::Aggregate(expr) => expr.traverse(visitor),
            ExpressionNode::Window(expr) => expr.traverse(visitor),
            ExpressionNode::Identifier(expr) => expr.traverse(visitor),
            ExpressionNode::Case(expr) => expr.traverse(visitor),
            ExpressionNode::Values(expr) => expr.traverse(visitor),
            ExpressionNode::Cte(expr) => expr.traverse(visitor),
            ExpressionNode::OrderBy(expr) => expr.traverse(visitor),
            ExpressionNode::Bound(expr) => expr.traverse(visitor),
            ExpressionNode::Raw(expr) => expr.traverse(visitor),
        }
    }
}

/// A bound value leaf; compiles to a placeholder token, never the raw value
#[derive(Debug, Clone, PartialEq)]
pub struct BoundValueExpression {
    value: Value,
    logical_type: LogicalType,
}

impl BoundValueExpression {
    pub fn new(value: Value, logical_type: Option<LogicalType>) -> Self {
        let logical_type = logical_type.unwrap_or_else(|| value.get_type());
        Self {
            value,
            logical_type,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn logical_type(&self) -> &LogicalType {
        &self.logical_type
    }
}

impl Expression for BoundValueExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        Ok(binder.bind_value(self.value.clone(), Some(self.logical_type.clone()), "c"))
    }

    fn traverse(&self, _visitor: &mut dyn FnMut(&dyn Expression)) {}
}

/// An opaque SQL fragment inserted verbatim, used for sub-queries and
/// fragments assembled outside the builder; trusted by contract
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpression {
    fragment: String,
}

impl RawExpression {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Expression for RawExpression {
    fn sql(&self, _binder: &mut ValueBinder) -> Result<String> {
        Ok(self.fragment.clone())
    }

    fn traverse(&self, _visitor: &mut dyn FnMut(&dyn Expression)) {}
}

impl From<QueryExpression> for ExpressionNode {
    fn from(expr: QueryExpression) -> Self {
        ExpressionNode::Query(expr)
    }
}

impl From<ComparisonExpression> for ExpressionNode {
    fn from(expr: ComparisonExpression) -> Self {
        ExpressionNode::Comparison(expr)
    }
}

impl From<BetweenExpression> for ExpressionNode {
    fn from(expr: BetweenExpression) -> Self {
        ExpressionNode::Between(expr)
    }
}

impl From<UnaryExpression> for ExpressionNode {
    fn from(expr: UnaryExpression) -> Self {
        ExpressionNode::Unary(expr)
    }
}

impl From<FunctionExpression> for ExpressionNode {
    fn from(expr: FunctionExpression) -> Self {
        ExpressionNode::Function(expr)
    }
}

impl From<AggregateExpression> for ExpressionNode {
    fn from(expr: AggregateExpression) -> Self {
        ExpressionNode::Aggregate(expr)
    }
}

impl From<WindowExpression> for ExpressionNode {
    fn from(expr: WindowExpression) -> Self {
        ExpressionNode::Window(expr)
    }
}

impl From<IdentifierExpression> for ExpressionNode {
    fn from(expr: IdentifierExpression) -> Self {
        ExpressionNode::Identifier(expr)
    }
}

impl From<CaseStatementExpression> for ExpressionNode {
    fn from(expr: CaseStatementExpression) -> Self {
        ExpressionNode::Case(expr)
    }
}

impl From<ValuesExpression> for ExpressionNode {
    fn from(expr: ValuesExpression) -> Self {
        ExpressionNode::Values(expr)
    }
}

impl From<CommonTableExpression> for ExpressionNode {
    fn from(expr: CommonTableExpression) -> Self {
        ExpressionNode::Cte(expr)
    }
}

impl From<OrderByExpression> for ExpressionNode {
    fn from(expr: OrderByExpression) -> Self {
        ExpressionNode::OrderBy(expr)
    }
}

impl From<BoundValueExpression> for ExpressionNode {
    fn from(expr: BoundValueExpression) -> Self {
        ExpressionNode::Bound(expr)
    }
}

impl From<RawExpression> for ExpressionNode {
    fn from(expr: RawExpression) -> Self {
        ExpressionNode::Raw(expr)
    }
}

impl From<Value> for ExpressionNode {
    fn from(value: Value) -> Self {
        ExpressionNode::Bound(BoundValueExpression::new(value, None))
    }
}

/// Expression utilities
pub mod utils {
    use super::*;

    /// Total node count of an expression tree, the expression itself included
    pub fn node_count(expr: &dyn Expression) -> usize {
        let mut count = 1;
        expr.traverse(&mut |_child| count += 1);
        count
    }
}
