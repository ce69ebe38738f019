//! VALUES, CASE and Common Table Expression Integration Tests

use sqlforge::{
    CaseStatementExpression, CommonTableExpression, Expression, IdentifierExpression,
    LogicalType, RawExpression, Result, TypeMap, Value, ValueBinder, ValuesExpression,
};

fn article_columns() -> Vec<String> {
    vec!["id".to_string(), "title".to_string()]
}

#[test]
fn test_values_rows_bind_per_column() -> Result<()> {
    let mut type_map = TypeMap::new();
    type_map.add("id", LogicalType::BigInt);

    let mut binder = ValueBinder::new();
    let expr = ValuesExpression::new(article_columns())
        .with_type_map(type_map)
        .row(vec![Value::Integer(1), Value::from("first")])?
        .row(vec![Value::Integer(2), Value::from("second")])?;
    assert_eq!(expr.sql(&mut binder)?, "VALUES (:c0, :c1), (:c2, :c3)");

    let bindings = binder.bindings();
    assert_eq!(bindings.len(), 4);
    assert_eq!(bindings[0].logical_type, LogicalType::BigInt);
    assert_eq!(bindings[1].logical_type, LogicalType::Varchar);
    Ok(())
}

#[test]
fn test_values_rejects_arity_mismatch() {
    let result = ValuesExpression::new(article_columns())
        .row(vec![Value::Integer(1), Value::from("a"), Value::from("extra")]);
    assert!(result.is_err());
}

#[test]
fn test_values_rows_and_subquery_are_exclusive() -> Result<()> {
    let subquery = RawExpression::new("SELECT id, title FROM drafts");

    let with_rows = ValuesExpression::new(article_columns())
        .row(vec![Value::Integer(1), Value::from("a")])?;
    assert!(with_rows.set_query(subquery.clone()).is_err());

    let with_query = ValuesExpression::new(article_columns()).set_query(subquery)?;
    assert!(with_query
        .row(vec![Value::Integer(1), Value::from("a")])
        .is_err());
    Ok(())
}

#[test]
fn test_values_from_subquery_compiles_the_query() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = ValuesExpression::new(article_columns())
        .set_query(RawExpression::new("SELECT id, title FROM drafts"))?;
    assert_eq!(expr.sql(&mut binder)?, "SELECT id, title FROM drafts");
    assert!(binder.is_empty());
    Ok(())
}

#[test]
fn test_cte_with_fields_and_materialization() -> Result<()> {
    let mut binder = ValueBinder::new();
    let cte = CommonTableExpression::new(
        "totals",
        RawExpression::new("SELECT region, SUM(amount) FROM orders GROUP BY region"),
    )
    .fields(vec!["region".to_string(), "total".to_string()])
    .materialized();
    assert_eq!(
        cte.sql(&mut binder)?,
        "totals(region, total) AS MATERIALIZED (SELECT region, SUM(amount) FROM orders GROUP BY region)"
    );

    let mut binder = ValueBinder::new();
    let cte = CommonTableExpression::new("t", RawExpression::new("SELECT 1")).not_materialized();
    assert_eq!(cte.sql(&mut binder)?, "t AS NOT MATERIALIZED (SELECT 1)");
    Ok(())
}

#[test]
fn test_recursive_cte_flag() -> Result<()> {
    let mut binder = ValueBinder::new();
    let cte = CommonTableExpression::new(
        "nums",
        RawExpression::new("SELECT 1 UNION ALL SELECT n + 1 FROM nums WHERE n < 10"),
    )
    .field("n")
    .recursive(true);
    assert!(cte.is_recursive());
    // RECURSIVE belongs to the WITH clause, not the CTE body
    assert_eq!(
        cte.sql(&mut binder)?,
        "nums(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM nums WHERE n < 10)"
    );
    Ok(())
}

#[test]
fn test_simple_case_binds_operand_comparisons() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = CaseStatementExpression::with_operand(IdentifierExpression::new("status"))
        .when_then(Value::from("open"), Value::Integer(1))
        .when_then(Value::from("closed"), Value::Integer(2))
        .else_result(Value::Integer(0));
    assert_eq!(
        expr.sql(&mut binder)?,
        "CASE status WHEN :c0 THEN :c1 WHEN :c2 THEN :c3 ELSE :c4 END"
    );
    assert_eq!(binder.len(), 5);
    Ok(())
}

#[test]
fn test_case_without_branches_fails_to_compile() {
    let mut binder = ValueBinder::new();
    let expr = CaseStatementExpression::new();
    assert!(expr.sql(&mut binder).is_err());
}

#[test]
fn test_clone_of_values_expression_is_deep() -> Result<()> {
    let expr = ValuesExpression::new(article_columns())
        .row(vec![Value::Integer(1), Value::from("a")])?;
    let cloned = expr.clone();

    let mut binder = ValueBinder::new();
    let mut fresh = ValueBinder::new();
    assert_eq!(expr.sql(&mut binder)?, cloned.sql(&mut fresh)?);
    Ok(())
}
