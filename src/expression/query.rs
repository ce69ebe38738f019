//! Conjunction builder
//!
//! `QueryExpression` accumulates a flat or nested set of conditions under a
//! single boolean conjunction (AND/OR/XOR) and compiles to a
//! conjunction-joined SQL string, parenthesized only when it holds more than
//! one condition. String-keyed conditions are parsed as `"field operator"`
//! tokens; the owned type map decides binding types and multiple-valued
//! (IN / NOT IN) normalization.

use crate::common::error::Result;
use crate::expression::{
    BetweenExpression, CaseStatementExpression, ComparisonExpression, Expression, ExpressionNode,
    IdentifierExpression, UnaryExpression, ValueBinder,
};
use crate::invalid_arg_err;
use crate::types::{LogicalType, TypeMap, Value};
use std::fmt;

/// The boolean joiner used between sibling conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
    Xor,
}

impl Conjunction {
    /// Parse a conjunction key, case-insensitively
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "and" => Some(Conjunction::And),
            "or" => Some(Conjunction::Or),
            "xor" => Some(Conjunction::Xor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
            Conjunction::Xor => "XOR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the nested condition structure accepted by [`QueryExpression::add`]
///
/// Mirrors the associative shapes the builder understands: raw SQL strings,
/// ready-made expressions, `"field operator" => value` pairs, and keyed
/// groups where the key is a conjunction (`and`/`or`/`xor`, case-insensitive)
/// or `not`.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Raw SQL fragment used verbatim as one condition
    Raw(String),
    /// A ready-made expression
    Expr(ExpressionNode),
    /// `"field operator"` key with a value to bind
    Keyed(String, Value),
    /// `"field operator"` key compared against another expression
    KeyedExpr(String, ExpressionNode),
    /// Keyed group; the key names a conjunction or `not`
    Nested(String, Vec<Condition>),
    /// Positional group, joined with AND
    Group(Vec<Condition>),
}

impl Condition {
    pub fn raw(fragment: impl Into<String>) -> Self {
        Condition::Raw(fragment.into())
    }

    pub fn keyed(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Condition::Keyed(key.into(), value.into())
    }

    pub fn expr(expr: impl Into<ExpressionNode>) -> Self {
        Condition::Expr(expr.into())
    }

    pub fn and(conditions: Vec<Condition>) -> Self {
        Condition::Nested("AND".to_string(), conditions)
    }

    pub fn or(conditions: Vec<Condition>) -> Self {
        Condition::Nested("OR".to_string(), conditions)
    }

    pub fn xor(conditions: Vec<Condition>) -> Self {
        Condition::Nested("XOR".to_string(), conditions)
    }

    pub fn not(conditions: Vec<Condition>) -> Self {
        Condition::Nested("NOT".to_string(), conditions)
    }
}

/// One stored condition: either a raw SQL string or a child expression
#[derive(Debug, Clone, PartialEq)]
enum ConditionPart {
    Raw(String),
    Node(ExpressionNode),
}

/// A conjunction of child expressions and raw condition strings
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpression {
    conjunction: Conjunction,
    conditions: Vec<ConditionPart>,
    type_map: TypeMap,
}

impl Default for QueryExpression {
    fn default() -> Self {
        Self::new(Conjunction::And)
    }
}

impl QueryExpression {
    pub fn new(conjunction: Conjunction) -> Self {
        Self {
            conjunction,
            conditions: Vec::new(),
            type_map: TypeMap::new(),
        }
    }

    pub fn with_type_map(mut self, type_map: TypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn set_conjunction(&mut self, conjunction: Conjunction) -> &mut Self {
        self.conjunction = conjunction;
        self
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }

    pub fn type_map_mut(&mut self) -> &mut TypeMap {
        &mut self.type_map
    }

    /// Number of direct children
    pub fn count(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Add a set of conditions, nesting keyed groups as child expressions
    pub fn add(mut self, conditions: impl IntoIterator<Item = Condition>) -> Result<Self> {
        for condition in conditions {
            match condition {
                Condition::Raw(fragment) => {
                    self.conditions.push(ConditionPart::Raw(fragment));
                }
                Condition::Expr(node) => {
                    self.conditions.push(ConditionPart::Node(node));
                }
                Condition::Group(inner) => {
                    let nested = self.nested(Conjunction::And, inner)?;
                    self.conditions
                        .push(ConditionPart::Node(ExpressionNode::Query(nested)));
                }
                Condition::Nested(key, inner) => {
                    let node = match Conjunction::from_key(&key) {
                        Some(conjunction) => {
                            ExpressionNode::Query(self.nested(conjunction, inner)?)
                        }
                        None if key.eq_ignore_ascii_case("not") => {
                            let group = self.nested(Conjunction::And, inner)?;
                            ExpressionNode::Unary(UnaryExpression::prefix("NOT", group))
                        }
                        None => {
                            return Err(invalid_arg_err!(
                                "unknown conjunction key `{}`; expected one of AND, OR, XOR, NOT",
                                key
                            ))
                        }
                    };
                    self.conditions.push(ConditionPart::Node(node));
                }
                Condition::Keyed(key, value) => {
                    let node = self.parse_condition(&key, value)?;
                    self.conditions.push(ConditionPart::Node(node));
                }
                Condition::KeyedExpr(key, expr) => {
                    let (field, operator) = split_condition_key(&key);
                    let operator = match operator {
                        "is" => "=",
                        "is not" => "!=",
                        other => other,
                    };
                    let comparison = ComparisonExpression::with_expr(
                        IdentifierExpression::new(field),
                        expr,
                        operator,
                    );
                    self.conditions
                        .push(ConditionPart::Node(ExpressionNode::Comparison(comparison)));
                }
            }
        }
        Ok(self)
    }

    /// `field = value`; null values must use is_null / is_not_null
    pub fn eq(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), "=")
    }

    /// `field != value`; null values must use is_null / is_not_null
    pub fn not_eq(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), "!=")
    }

    pub fn gt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), ">")
    }

    pub fn lt(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), "<")
    }

    pub fn gte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), ">=")
    }

    pub fn lte(self, field: &str, value: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, value.into(), "<=")
    }

    pub fn like(self, field: &str, pattern: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, pattern.into(), "like")
    }

    pub fn not_like(self, field: &str, pattern: impl Into<Value>) -> Result<Self> {
        self.push_comparison(field, pattern.into(), "not like")
    }

    /// `field IN (…)`, one placeholder per element
    pub fn in_list(self, field: &str, values: Vec<Value>) -> Result<Self> {
        self.push_many(field, values, "in")
    }

    /// `field NOT IN (…)`
    pub fn not_in_list(self, field: &str, values: Vec<Value>) -> Result<Self> {
        self.push_many(field, values, "not in")
    }

    pub fn is_null(mut self, field: &str) -> Self {
        let unary = UnaryExpression::postfix("IS NULL", IdentifierExpression::new(field));
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Unary(unary)));
        self
    }

    pub fn is_not_null(mut self, field: &str) -> Self {
        let unary = UnaryExpression::postfix("IS NOT NULL", IdentifierExpression::new(field));
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Unary(unary)));
        self
    }

    /// `field BETWEEN from AND to`
    pub fn between(
        mut self,
        field: &str,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        let logical_type = self.type_map.type_of(field).cloned();
        let between = BetweenExpression::new(
            IdentifierExpression::new(field),
            from.into(),
            to.into(),
            logical_type,
        );
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Between(between)));
        self
    }

    /// `EXISTS (…)`
    pub fn exists(mut self, query: impl Into<ExpressionNode>) -> Self {
        let unary = UnaryExpression::prefix("EXISTS", query);
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Unary(unary)));
        self
    }

    /// `NOT EXISTS (…)`
    pub fn not_exists(mut self, query: impl Into<ExpressionNode>) -> Self {
        let unary = UnaryExpression::prefix("NOT EXISTS", query);
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Unary(unary)));
        self
    }

    /// `left = right` where both sides are identifiers
    pub fn equal_fields(mut self, left: &str, right: &str) -> Self {
        let comparison = ComparisonExpression::with_expr(
            IdentifierExpression::new(left),
            IdentifierExpression::new(right),
            "=",
        );
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Comparison(comparison)));
        self
    }

    /// New AND expression sharing this one's type map
    pub fn and(&self, conditions: Vec<Condition>) -> Result<QueryExpression> {
        self.nested(Conjunction::And, conditions)
    }

    /// New OR expression sharing this one's type map
    pub fn or(&self, conditions: Vec<Condition>) -> Result<QueryExpression> {
        self.nested(Conjunction::Or, conditions)
    }

    /// New XOR expression sharing this one's type map
    pub fn xor(&self, conditions: Vec<Condition>) -> Result<QueryExpression> {
        self.nested(Conjunction::Xor, conditions)
    }

    /// Add a NOT-wrapped group of conditions
    pub fn not(mut self, conditions: Vec<Condition>) -> Result<Self> {
        let group = self.nested(Conjunction::And, conditions)?;
        let unary = UnaryExpression::prefix("NOT", group);
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Unary(unary)));
        Ok(self)
    }

    /// Start a searched CASE expression
    pub fn case(&self) -> CaseStatementExpression {
        CaseStatementExpression::new()
    }

    fn nested(&self, conjunction: Conjunction, conditions: Vec<Condition>) -> Result<QueryExpression> {
        QueryExpression::new(conjunction)
            .with_type_map(self.type_map.clone())
            .add(conditions)
    }

    fn push_comparison(mut self, field: &str, value: Value, operator: &str) -> Result<Self> {
        let node = self.build_comparison(field, value, operator)?;
        self.conditions.push(ConditionPart::Node(node));
        Ok(self)
    }

    fn push_many(mut self, field: &str, values: Vec<Value>, operator: &str) -> Result<Self> {
        let element_type = self
            .type_map
            .type_of(field)
            .map(|t| t.element_type().clone());
        let comparison = ComparisonExpression::many(
            IdentifierExpression::new(field),
            values,
            element_type,
            operator,
        )?;
        self.conditions
            .push(ConditionPart::Node(ExpressionNode::Comparison(comparison)));
        Ok(self)
    }

    /// Parse a `"field operator"` key and its value into an expression
    ///
    /// The operator is inferred from the trailing tokens of the key (`>=`,
    /// `is not`, `not like`, …) and defaults to `=`. List values and
    /// list-typed columns normalize the operator to IN / NOT IN over the
    /// element type. A null value is only accepted under IS / IS NOT.
    fn parse_condition(&self, key: &str, value: Value) -> Result<ExpressionNode> {
        let (field, operator) = split_condition_key(key);
        self.build_comparison(field, value, operator)
    }

    fn build_comparison(&self, field: &str, value: Value, operator: &str) -> Result<ExpressionNode> {
        let operator = operator.trim().to_lowercase();
        let declared = self.type_map.type_of(field).cloned();
        let multiple =
            declared.as_ref().map_or(false, |t| t.is_multiple()) || matches!(value, Value::List(_));

        if multiple && !value.is_null() {
            let operator = match operator.as_str() {
                "in" | "not in" => operator,
                "!=" | "<>" => "not in".to_string(),
                _ => "in".to_string(),
            };
            let element_type = declared.map(|t| t.element_type().clone());
            let values = match value {
                Value::List(values) => values,
                single => vec![single],
            };
            let comparison = ComparisonExpression::many(
                IdentifierExpression::new(field),
                values,
                element_type,
                operator,
            )?;
            return Ok(ExpressionNode::Comparison(comparison));
        }

        if value.is_null() {
            return match operator.as_str() {
                "is" => Ok(ExpressionNode::Unary(UnaryExpression::postfix(
                    "IS NULL",
                    IdentifierExpression::new(field),
                ))),
                "is not" => Ok(ExpressionNode::Unary(UnaryExpression::postfix(
                    "IS NOT NULL",
                    IdentifierExpression::new(field),
                ))),
                _ => Err(invalid_arg_err!(
                    "expression `{}` is missing operator (IS, IS NOT) with `null` value",
                    field
                )),
            };
        }

        let operator = match operator.as_str() {
            "is" => "=".to_string(),
            "is not" => "!=".to_string(),
            _ => operator,
        };
        let logical_type: Option<LogicalType> = declared.or_else(|| Some(value.get_type()));
        let comparison = ComparisonExpression::new(
            IdentifierExpression::new(field),
            value,
            logical_type,
            operator,
        )?;
        Ok(ExpressionNode::Comparison(comparison))
    }
}

/// Split a condition key into field and trailing operator tokens
fn split_condition_key(key: &str) -> (&str, &str) {
    match key.trim().split_once(' ') {
        Some((field, operator)) => (field, operator.trim()),
        None => (key.trim(), "="),
    }
}

impl Expression for QueryExpression {
    fn sql(&self, binder: &mut ValueBinder) -> Result<String> {
        let len = self.count();
        if len == 0 {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(len);
        for condition in &self.conditions {
            let sql = match condition {
                ConditionPart::Raw(fragment) => fragment.clone(),
                ConditionPart::Node(node) => node.sql(binder)?,
            };
            if !sql.is_empty() {
                parts.push(sql);
            }
        }
        let joined = parts.join(&format!(" {} ", self.conjunction));
        if len == 1 {
            Ok(joined)
        } else {
            Ok(format!("({})", joined))
        }
    }

    fn traverse(&self, visitor: &mut dyn FnMut(&dyn Expression)) {
        for condition in &self.conditions {
            if let ConditionPart::Node(node) = condition {
                visitor(node);
                node.traverse(visitor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_condition_key() {
        assert_eq!(split_condition_key("id"), ("id", "="));
        assert_eq!(split_condition_key("created >="), ("created", ">="));
        assert_eq!(split_condition_key("status is not"), ("status", "is not"));
    }

    #[test]
    fn test_single_condition_is_not_parenthesized() {
        let mut binder = ValueBinder::new();
        let expr = QueryExpression::default().eq("id", 1).unwrap();
        assert_eq!(expr.count(), 1);
        assert_eq!(expr.sql(&mut binder).unwrap(), "id = :c0");
    }

    #[test]
    fn test_multiple_conditions_are_parenthesized() {
        let mut binder = ValueBinder::new();
        let expr = QueryExpression::default()
            .eq("id", 1)
            .unwrap()
            .gt("age", 18)
            .unwrap();
        assert_eq!(expr.count(), 2);
        assert_eq!(expr.sql(&mut binder).unwrap(), "(id = :c0 AND age > :c1)");
    }
}
