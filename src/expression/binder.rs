//! Value Binding
//!
//! This module implements the placeholder/parameter registry consumed by
//! expression compilation. Compiled SQL embeds only generated tokens; the
//! raw values and their semantic types are registered here for later
//! statement execution, which is the mechanism preventing SQL injection for
//! bound (non-identifier) values.

use crate::types::{LogicalType, Value};
use log::trace;

/// A registered placeholder binding
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub placeholder: String,
    pub value: Value,
    pub logical_type: LogicalType,
}

/// Placeholder generator and binding registry
///
/// Placeholders are unique named tokens of the form `:{prefix}{n}` backed by
/// a monotonically increasing counter. A fresh binder restarts the counter,
/// so compiling a cloned tree with a fresh binder reproduces the same SQL.
#[derive(Debug, Clone, Default)]
pub struct ValueBinder {
    bindings: Vec<Binding>,
    count: usize,
}

impl ValueBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a unique placeholder token for the given prefix
    ///
    /// Tokens already starting with `:` are passed through untouched, but
    /// still consume a counter slot.
    pub fn placeholder(&mut self, prefix: &str) -> String {
        let number = self.count;
        self.count += 1;
        if prefix.starts_with(':') {
            return prefix.to_string();
        }
        format!(":{}{}", prefix, number)
    }

    /// Register a value under an already generated placeholder
    pub fn bind(
        &mut self,
        placeholder: impl Into<String>,
        value: Value,
        logical_type: Option<LogicalType>,
    ) {
        let placeholder = placeholder.into();
        let logical_type = logical_type.unwrap_or_else(|| value.get_type());
        trace!(
            "binding {} = {} ({})",
            placeholder,
            value,
            logical_type
        );
        self.bindings.push(Binding {
            placeholder,
            value,
            logical_type,
        });
    }

    /// Generate a placeholder and bind the value to it in one step,
    /// returning the token to embed in the compiled SQL
    pub fn bind_value(
        &mut self,
        value: Value,
        logical_type: Option<LogicalType>,
        prefix: &str,
    ) -> String {
        let placeholder = self.placeholder(prefix);
        self.bind(placeholder.clone(), value, logical_type);
        placeholder
    }

    /// All registered bindings in insertion order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Clear all bindings and restart the placeholder counter
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.count = 0;
    }

    /// Restart only the placeholder counter
    pub fn reset_count(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_generation() {
        let mut binder = ValueBinder::new();
        assert_eq!(binder.placeholder("c"), ":c0");
        assert_eq!(binder.placeholder("c"), ":c1");
        assert_eq!(binder.placeholder("param"), ":param2");
        // pre-formed tokens pass through
        assert_eq!(binder.placeholder(":named"), ":named");
    }

    #[test]
    fn test_bind_value_registers_in_order() {
        let mut binder = ValueBinder::new();
        let first = binder.bind_value(Value::Integer(1), None, "c");
        let second = binder.bind_value(Value::from("x"), Some(LogicalType::Varchar), "c");
        assert_eq!(first, ":c0");
        assert_eq!(second, ":c1");

        let bindings = binder.bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].value, Value::Integer(1));
        assert_eq!(bindings[0].logical_type, LogicalType::Integer);
        assert_eq!(bindings[1].placeholder, ":c1");
        assert_eq!(bindings[1].logical_type, LogicalType::Varchar);
    }

    #[test]
    fn test_reset() {
        let mut binder = ValueBinder::new();
        binder.bind_value(Value::Integer(1), None, "c");
        binder.reset();
        assert!(binder.is_empty());
        assert_eq!(binder.placeholder("c"), ":c0");
    }
}
