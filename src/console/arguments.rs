//! Read-only accessor over already-parsed console input
//!
//! Positional arguments, named options and the declared argument-name order
//! come from an external option parser; this type only answers lookups.

use crate::common::error::{Result, SqlForgeError};
use std::collections::HashMap;

/// Value of a parsed named option
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Bool(bool),
    Many(Vec<String>),
}

/// Parsed positional arguments, named options and a name→index map
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    positional: Vec<String>,
    options: HashMap<String, OptionValue>,
    argument_names: Vec<String>,
}

impl Arguments {
    pub fn new(
        positional: Vec<String>,
        options: HashMap<String, OptionValue>,
        argument_names: Vec<String>,
    ) -> Self {
        Self {
            positional,
            options,
            argument_names,
        }
    }

    /// All positional arguments in order
    pub fn get_arguments(&self) -> &[String] {
        &self.positional
    }

    pub fn get_argument_at(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(|s| s.as_str())
    }

    pub fn has_argument_at(&self, index: usize) -> bool {
        index < self.positional.len()
    }

    /// Check whether a declared argument received a value
    pub fn has_argument(&self, name: &str) -> bool {
        match self.argument_index(name) {
            Some(index) => index < self.positional.len(),
            None => false,
        }
    }

    /// Look up a positional argument by its declared name
    ///
    /// An undeclared name is an error; a declared argument that received no
    /// value yields `None`.
    pub fn get_argument(&self, name: &str) -> Result<Option<&str>> {
        let index = self.argument_index(name).ok_or_else(|| {
            SqlForgeError::Console(format!(
                "argument `{}` is not defined on this command",
                name
            ))
        })?;
        Ok(self.positional.get(index).map(|s| s.as_str()))
    }

    pub fn get_options(&self) -> &HashMap<String, OptionValue> {
        &self.options
    }

    pub fn get_option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Fetch a boolean option, erroring when the option holds another type
    pub fn get_boolean_option(&self, name: &str) -> Result<Option<bool>> {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(SqlForgeError::Console(format!(
                "the `{}` option is not a boolean",
                name
            ))),
        }
    }

    /// Fetch a multi-valued option, erroring when the option holds another type
    pub fn get_multiple_option(&self, name: &str) -> Result<Option<&[String]>> {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Many(values)) => Ok(Some(values.as_slice())),
            Some(_) => Err(SqlForgeError::Console(format!(
                "the `{}` option is not multi-valued",
                name
            ))),
        }
    }

    fn argument_index(&self, name: &str) -> Option<usize> {
        self.argument_names.iter().position(|n| n == name)
    }
}
