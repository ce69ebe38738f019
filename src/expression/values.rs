//! VALUES expressions for INSERT statements
//!
//! A column list with either literal rows or a sub-query source. The two
//! are mutually exclusive; mixing them is rejected eagerly.

use crate::common::error::Result;
use crate::expression::{Expression, ExpressionNode, ValueBinder};
use crate::invalid_arg_err;
use crate::types::{TypeMap, Value};
use log::debug;

/// Column list + row list (or a sub-query) for INSERT
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesExpression {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    query: Option<Box<ExpressionNode>>,
    type_map: TypeMap,
}

impl ValuesExpression {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            query: None,
            type_map: TypeMap::new(),
        }
    }

    pub fn with_type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append one literal row; its arity must match the column list
    pub fn row(mut self, values: Vec<Value>) -> Result<Self> {
        if self.query.is_some() {
            return Err(invalid_arg_err!(
                "cannot mix literal rows with a sub-query in a VALUES expression"
            ));
        }
        if values.len() != self.columns.len() {
            return Err(invalid_arg_err!(
                "row has {} values but {} columns were declared",
                values.len(),
                self.columns.len()
            ));
        }
        self.rows.push(values);
        Ok(self)
    }

    /// Use a sub-query as the row source instead of literal rows
    pub fn set_query(mut self, query: impl Into<ExpressionNode>) -> Result<Self> {
        if !self.rows.is_empty() {
            return Err(invalid_arg_err!(
                "cannot mix a sub-query with literal rows in a VALUES expression"
            ));
        }
        debug!("values expression switching to sub-query source");
        self.query = Some(Box::new(query.into()));
        Ok(self)
    }
}

impl Expression for ValuesExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        if let Some(query) = &self.query {
            return query.sql(binder);
        }
        if self.rows.is_empty() {
            return Ok(String::new());
        }

        let mut compiled_rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut placeholders = Vec::with_capacity(row.len());
            for (column, value) in self.columns.iter().zip(row) {
                let logical_type = self
                    .type_map
                    .type_of(column)
                    .cloned()
                    .unwrap_or_else(|| value.get_type());
                placeholders.push(binder.bind_value(value.clone(), Some(logical_type), "c"));
            }
            compiled_rows.push(format!("({})", placeholders.join(", ")));
        }
        Ok(format!("VALUES {}", compiled_rows.join(", ")))
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        if let Some(query) = &self.query {
            visitor(&**query);
            query.traverse(visitor);
        }
    }
}
