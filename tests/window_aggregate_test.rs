//! Window and Aggregate Expression Integration Tests

use pretty_assertions::assert_eq;
use sqlforge::expression::utils::node_count;
use sqlforge::{
    AggregateExpression, Condition, Expression, OrderDirection, Result, ValueBinder,
    WindowExpression, WindowFrameBound,
};

#[test]
fn test_named_only_window_compiles_as_bare_name() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .over(Some("w"));
    assert_eq!(expr.sql(&mut binder)?, "SUM(amount) OVER w");
    Ok(())
}

#[test]
fn test_any_clause_forces_parenthesized_over() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .over(Some("w"))
        .order_by("created", OrderDirection::Asc);
    assert_eq!(
        expr.sql(&mut binder)?,
        "SUM(amount) OVER (w ORDER BY created ASC)"
    );
    Ok(())
}

#[test]
fn test_partition_order_and_frame() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("AVG")
        .identifier("price")
        .partition("region")
        .order_by("created", OrderDirection::Asc)
        .range(
            WindowFrameBound::UnboundedPreceding,
            Some(WindowFrameBound::CurrentRow),
        );
    assert_eq!(
        expr.sql(&mut binder)?,
        "AVG(price) OVER (PARTITION BY region ORDER BY created ASC RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)"
    );
    Ok(())
}

#[test]
fn test_zero_offsets_compile_to_current_row() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("COUNT")
        .literal("*")
        .rows(WindowFrameBound::Preceding(0), Some(WindowFrameBound::Following(0)));
    assert_eq!(
        expr.sql(&mut binder)?,
        "COUNT(*) OVER (ROWS BETWEEN CURRENT ROW AND CURRENT ROW)"
    );
    Ok(())
}

#[test]
fn test_single_bound_frame() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("COUNT")
        .literal("*")
        .rows(WindowFrameBound::Preceding(3), None);
    assert_eq!(expr.sql(&mut binder)?, "COUNT(*) OVER (ROWS 3 PRECEDING)");
    Ok(())
}

#[test]
fn test_frame_exclusion() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .groups(
            WindowFrameBound::UnboundedPreceding,
            Some(WindowFrameBound::UnboundedFollowing),
        )
        .exclude_current();
    assert_eq!(
        expr.sql(&mut binder)?,
        "SUM(amount) OVER (GROUPS BETWEEN UNBOUNDED PRECEDING AND UNBOUNDED FOLLOWING EXCLUDE CURRENT ROW)"
    );
    Ok(())
}

#[test]
fn test_filter_and_over_combined() -> Result<()> {
    let mut binder = ValueBinder::new();
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .filter(vec![Condition::keyed("status", "paid")])?
        .partition("region");
    assert_eq!(
        expr.sql(&mut binder)?,
        "SUM(amount) FILTER (WHERE status = :c0) OVER (PARTITION BY region)"
    );
    assert_eq!(binder.len(), 1);
    Ok(())
}

#[test]
fn test_standalone_window_definition() -> Result<()> {
    // the shape used by a WITH ... WINDOW w AS (...) clause
    let mut binder = ValueBinder::new();
    let window = WindowExpression::new()
        .partition("region")
        .order_by("created", OrderDirection::Desc);
    assert!(!window.is_named_only());
    assert_eq!(
        window.sql(&mut binder)?,
        "PARTITION BY region ORDER BY created DESC"
    );
    Ok(())
}

#[test]
fn test_is_named_only_transitions() {
    let window = WindowExpression::named("w");
    assert!(window.is_named_only());

    let window = WindowExpression::named("w").order_by("id", OrderDirection::Asc);
    assert!(!window.is_named_only());

    let window = WindowExpression::named("w").rows(WindowFrameBound::CurrentRow, None);
    assert!(!window.is_named_only());
}

#[test]
fn test_aggregate_traversal_counts_filter_and_window() -> Result<()> {
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .filter(vec![Condition::keyed("status", "paid")])?
        .partition("region");
    // aggregate root, filter query, its comparison + identifier,
    // window, partition identifier
    assert_eq!(node_count(&expr), 6);
    Ok(())
}

#[test]
fn test_clone_compiles_identically() -> Result<()> {
    let expr = AggregateExpression::new("AVG")
        .identifier("price")
        .filter(vec![Condition::keyed("qty >", 0)])?
        .partition("region")
        .order_by("created", OrderDirection::Asc);
    let cloned = expr.clone();

    let mut binder = ValueBinder::new();
    let mut fresh = ValueBinder::new();
    assert_eq!(expr.sql(&mut binder)?, cloned.sql(&mut fresh)?);
    Ok(())
}
