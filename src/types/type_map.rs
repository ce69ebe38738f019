use crate::types::logical_type::LogicalType;
use std::collections::HashMap;

/// Column name to logical type mapping used to pick binding types
///
/// Defaults usually come from a table schema; explicit types layered on top
/// take precedence. A column mapped to a list type is multiple-valued and
/// normalizes bare equality comparisons into IN / NOT IN.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMap {
    defaults: HashMap<String, LogicalType>,
    types: HashMap<String, LogicalType>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a type map from explicit column types
    pub fn from_types(types: HashMap<String, LogicalType>) -> Self {
        Self {
            defaults: HashMap::new(),
            types,
        }
    }

    /// Replace the default types
    pub fn set_defaults(&mut self, defaults: HashMap<String, LogicalType>) -> &mut Self {
        self.defaults = defaults;
        self
    }

    /// Replace the explicit types
    pub fn set_types(&mut self, types: HashMap<String, LogicalType>) -> &mut Self {
        self.types = types;
        self
    }

    /// Register an explicit type for a column
    pub fn add(&mut self, column: impl Into<String>, logical_type: LogicalType) -> &mut Self {
        self.types.insert(column.into(), logical_type);
        self
    }

    /// Look up the type for a column, explicit types first
    pub fn type_of(&self, column: &str) -> Option<&LogicalType> {
        self.types.get(column).or_else(|| self.defaults.get(column))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.defaults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_types_win_over_defaults() {
        let mut map = TypeMap::new();
        map.set_defaults(HashMap::from([(
            "id".to_string(),
            LogicalType::Integer,
        )]));
        assert_eq!(map.type_of("id"), Some(&LogicalType::Integer));

        map.add("id", LogicalType::BigInt);
        assert_eq!(map.type_of("id"), Some(&LogicalType::BigInt));
        assert_eq!(map.type_of("missing"), None);
    }
}
