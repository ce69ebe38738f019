use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqlforge::{
    AggregateExpression, Condition, Expression, OrderDirection, QueryExpression, Value,
    ValueBinder, WindowFrameBound,
};

fn nested_conditions() -> QueryExpression {
    QueryExpression::default()
        .eq("id", 1)
        .unwrap()
        .between("age", 18, 65)
        .add(vec![Condition::or(vec![
            Condition::keyed("status", "new"),
            Condition::keyed("status", "open"),
            Condition::not(vec![Condition::keyed("archived", true)]),
        ])])
        .unwrap()
        .add(vec![Condition::keyed(
            "category_id",
            Value::List(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
                Value::Integer(4),
            ]),
        )])
        .unwrap()
}

fn bench_compile_nested_conditions(c: &mut Criterion) {
    let expr = nested_conditions();
    c.bench_function("compile_nested_conditions", |b| {
        b.iter(|| {
            let mut binder = ValueBinder::new();
            black_box(expr.sql(&mut binder).unwrap())
        })
    });
}

fn bench_build_and_compile(c: &mut Criterion) {
    c.bench_function("build_and_compile", |b| {
        b.iter(|| {
            let expr = nested_conditions();
            let mut binder = ValueBinder::new();
            black_box(expr.sql(&mut binder).unwrap())
        })
    });
}

fn bench_compile_windowed_aggregate(c: &mut Criterion) {
    let expr = AggregateExpression::new("SUM")
        .identifier("amount")
        .filter(vec![Condition::keyed("status", "paid")])
        .unwrap()
        .partition("region")
        .order_by("created", OrderDirection::Asc)
        .range(
            WindowFrameBound::UnboundedPreceding,
            Some(WindowFrameBound::CurrentRow),
        );
    c.bench_function("compile_windowed_aggregate", |b| {
        b.iter(|| {
            let mut binder = ValueBinder::new();
            black_box(expr.sql(&mut binder).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_compile_nested_conditions,
    bench_build_and_compile,
    bench_compile_windowed_aggregate
);
criterion_main!(benches);
