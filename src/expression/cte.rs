//! Common table expressions

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};

/// MATERIALIZED hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Materialized {
    Materialized,
    NotMaterialized,
}

impl Materialized {
    pub fn as_str(&self) -> &'static str {
        match self {
            Materialized::Materialized => "MATERIALIZED",
            Materialized::NotMaterialized => "NOT MATERIALIZED",
        }
    }
}

/// Name, field list, inner query, MATERIALIZED hint and RECURSIVE flag
///
/// Compiles to `name(fields) AS [NOT ]MATERIALIZED (query)`. The recursive
/// flag is consumed by the outer WITH clause, not printed here.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    name: String,
    fields: Vec<String>,
    query: Box<ExpressionNode>,
    materialized: Option<Materialized>,
    recursive: bool,
}

impl CommonTableExpression {
    pub fn new(name: impl Into<String>, query: impl Into<ExpressionNode>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            query: Box::new(query.into()),
            materialized: None,
            recursive: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn materialized(mut self) -> Self {
        self.materialized = Some(Materialized::Materialized);
        self
    }

    pub fn not_materialized(mut self) -> Self {
        self.materialized = Some(Materialized::NotMaterialized);
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }
}

impl Expression for CommonTableExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let fields = if self.fields.is_empty() {
            String::new()
        } else {
            format!("({})", self.fields.join(", "))
        };
        let modifier = match &self.materialized {
            Some(materialized) => format!("{} ", materialized.as_str()),
            None => String::new(),
        };
        Ok(format!(
            "{}{} AS {}({})",
            self.name,
            fields,
            modifier,
            self.query.sql(binder)?
        ))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        visitor(&*self.query);
        self.query.traverse(visitor);
    }
}
