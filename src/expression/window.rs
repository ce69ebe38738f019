//! Window expressions
//!
//! Models the SQL OVER clause specification: window name, partition list,
//! order list, frame (ROWS/RANGE/GROUPS with start/end bounds) and frame
//! exclusion. A window holding only a name compiles as the bare name so the
//! caller can print `OVER name` instead of `OVER (…)`.

use crate::common::error::Result;
use crate::expression::{
    Expression, ExpressionNode, IdentifierExpression, OrderByExpression, OrderDirection,
    ValueBinder,
};

/// Window frame types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameType {
    Rows,
    Range,
    Groups,
}

impl WindowFrameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowFrameType::Rows => "ROWS",
            WindowFrameType::Range => "RANGE",
            WindowFrameType::Groups => "GROUPS",
        }
    }
}

/// Window frame bounds
///
/// A zero offset compiles to the literal `CURRENT ROW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameBound {
    UnboundedPreceding,
    Preceding(u64),
    CurrentRow,
    Following(u64),
    UnboundedFollowing,
}

impl WindowFrameBound {
    fn sql(&self) -> String {
        match self {
            WindowFrameBound::UnboundedPreceding => "UNBOUNDED PRECEDING".to_string(),
            WindowFrameBound::UnboundedFollowing => "UNBOUNDED FOLLOWING".to_string(),
            WindowFrameBound::CurrentRow
            | WindowFrameBound::Preceding(0)
            | WindowFrameBound::Following(0) => "CURRENT ROW".to_string(),
            WindowFrameBound::Preceding(offset) => format!("{} PRECEDING", offset),
            WindowFrameBound::Following(offset) => format!("{} FOLLOWING", offset),
        }
    }
}

/// Window frame specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrame {
    pub frame_type: WindowFrameType,
    pub start: WindowFrameBound,
    pub end: Option<WindowFrameBound>,
}

/// Frame exclusion clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrameExclusion {
    CurrentRow,
    Group,
    Ties,
}

impl WindowFrameExclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowFrameExclusion::CurrentRow => "CURRENT ROW",
            WindowFrameExclusion::Group => "GROUP",
            WindowFrameExclusion::Ties => "TIES",
        }
    }
}

/// Window expression
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExpression {
    name: Option<String>,
    partitions: Vec<ExpressionNode>,
    order: Vec<OrderByExpression>,
    frame: Option<WindowFrame>,
    exclusion: Option<WindowFrameExclusion>,
}

impl Default for WindowExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowExpression {
    pub fn new() -> Self {
        Self {
            name: None,
            partitions: Vec::new(),
            order: Vec::new(),
            frame: None,
            exclusion: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Partition by a column
    pub fn partition(self, field: &str) -> Self {
        self.partition_expr(IdentifierExpression::new(field))
    }

    /// Partition by an arbitrary expression
    pub fn partition_expr(mut self, expr: impl Into<ExpressionNode>) -> Self {
        self.partitions.push(expr.into());
        self
    }

    /// Order by a column
    pub fn order_by(self, field: &str, direction: OrderDirection) -> Self {
        self.order_by_expr(OrderByExpression::new(field, direction))
    }

    pub fn order_by_expr(mut self, order: OrderByExpression) -> Self {
        self.order.push(order);
        self
    }

    /// ROWS frame
    pub fn rows(self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        self.frame(WindowFrameType::Rows, start, end)
    }

    /// RANGE frame
    pub fn range(self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        self.frame(WindowFrameType::Range, start, end)
    }

    /// GROUPS frame
    pub fn groups(self, start: WindowFrameBound, end: Option<WindowFrameBound>) -> Self {
        self.frame(WindowFrameType::Groups, start, end)
    }

    pub fn frame(
        mut self,
        frame_type: WindowFrameType,
        start: WindowFrameBound,
        end: Option<WindowFrameBound>,
    ) -> Self {
        self.frame = Some(WindowFrame {
            frame_type,
            start,
            end,
        });
        self
    }

    pub fn exclude_current(mut self) -> Self {
        self.exclusion = Some(WindowFrameExclusion::CurrentRow);
        self
    }

    pub fn exclude_group(mut self) -> Self {
        self.exclusion = Some(WindowFrameExclusion::Group);
        self
    }

    pub fn exclude_ties(mut self) -> Self {
        self.exclusion = Some(WindowFrameExclusion::Ties);
        self
    }

    /// True only when a name is set and no partition/order/frame exists;
    /// drives `OVER name` vs `OVER (…)` in the caller
    pub fn is_named_only(&self) -> bool {
        self.name.is_some()
            && self.partitions.is_empty()
            && self.order.is_empty()
            && self.frame.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.partitions.is_empty()
            && self.order.is_empty()
            && self.frame.is_none()
    }
}

impl Expression for WindowExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        if self.is_named_only() {
            return Ok(self.name.clone().unwrap_or_default());
        }

        let mut clauses: Vec<String> = Vec::new();
        if let Some(name) = &self.name {
            clauses.push(name.clone());
        }

        if !self.partitions.is_empty() {
            let mut parts = Vec::with_capacity(self.partitions.len());
            for partition in &self.partitions {
                parts.push(partition.sql(binder)?);
            }
            clauses.push(format!("PARTITION BY {}", parts.join(", ")));
        }

        if !self.order.is_empty() {
            let mut parts = Vec::with_capacity(self.order.len());
            for order in &self.order {
                parts.push(order.sql(binder)?);
            }
            clauses.push(format!("ORDER BY {}", parts.join(", ")));
        }

        if let Some(frame) = &self.frame {
            let mut frame_sql = match &frame.end {
                Some(end) => format!(
                    "{} BETWEEN {} AND {}",
                    frame.frame_type.as_str(),
                    frame.start.sql(),
                    end.sql()
                ),
                None => format!("{} {}", frame.frame_type.as_str(), frame.start.sql()),
            };
            if let Some(exclusion) = &self.exclusion {
                frame_sql.push_str(&format!(" EXCLUDE {}", exclusion.as_str()));
            }
            clauses.push(frame_sql);
        }

        Ok(clauses.join(" "))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        for partition in &self.partitions {
            visitor(partition);
            partition.traverse(visitor);
        }
        for order in &self.order {
            visitor(order);
            order.traverse(visitor);
        }
    }
}
