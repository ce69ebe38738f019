//! Identifier expressions
//!
//! A raw column or table name with an optional collation. Identifiers are
//! never bound; they are inserted verbatim into the compiled SQL, so any
//! caller-supplied identifier is a trusted string by contract. Quoting, when
//! wanted, is the concern of a separate identifier-quoting layer.

use crate::common::error::Result;
use crate::expression::{Expression, ValueBinder};

/// A column/table name, optionally collated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpression {
    identifier: String,
    collation: Option<String>,
}

impl IdentifierExpression {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            collation: None,
        }
    }

    pub fn with_collation(mut self, collation: impl Into<String>) -> Self {
        self.collation = Some(collation.into());
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }
}

impl Expression for IdentifierExpression {
    fn sql(&self, _binder: &mut ValueBinder) -> Result<String> {
        match &self.collation {
            Some(collation) => Ok(format!("{} COLLATE {}", self.identifier, collation)),
            None => Ok(self.identifier.clone()),
        }
    }

    fn traverse(&self, _visitor: &mut dyn FnMut(&dyn Expression)) {}
}
