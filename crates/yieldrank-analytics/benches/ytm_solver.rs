//! Benchmarks for the yield solver and batch ranking.
//!
//! Run with: cargo bench -p yieldrank-analytics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use yieldrank_analytics::prelude::*;
use yieldrank_core::types::BondSpec;

fn create_test_bond(id: usize) -> BondSpec {
    let coupons = [dec!(0.02), dec!(0.035), dec!(0.05), dec!(0.065)];
    let prices = [dec!(920), dec!(965), dec!(1000), dec!(1040)];
    let years = [2.0, 5.0, 10.0, 30.0];

    BondSpec::builder()
        .id(format!("BOND_{id:03}"))
        .face_value(dec!(1000))
        .price(prices[id % prices.len()])
        .coupon_rate(coupons[id % coupons.len()])
        .tax_rate(dec!(0.25))
        .years_to_maturity(years[id % years.len()])
        .build()
        .expect("valid bench bond")
}

fn bench_yield_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solve");
    let solver = YieldSolver::new();

    for years in [5u32, 30, 100] {
        let schedule = build_schedule(dec!(1000), dec!(0.05), years).expect("schedule");
        group.bench_with_input(BenchmarkId::from_parameter(years), &schedule, |b, s| {
            b.iter(|| solver.solve(black_box(s), black_box(dec!(950))))
        });
    }

    group.finish();
}

fn bench_single_bond(c: &mut Criterion) {
    let bond = create_test_bond(1);
    c.bench_function("compute_single_bond", |b| {
        b.iter(|| compute_single_bond(black_box(&bond)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let bonds: Vec<BondSpec> = (0..MAX_BATCH_SIZE).map(create_test_bond).collect();
    c.bench_function("compute_batch_20", |b| {
        b.iter(|| compute_batch(black_box(&bonds)))
    });

    let zero = Decimal::ZERO;
    let zeros: Vec<BondSpec> = (0..MAX_BATCH_SIZE)
        .map(|i| {
            BondSpec::builder()
                .id(format!("ZERO_{i}"))
                .face_value(dec!(100))
                .price(dec!(70))
                .coupon_rate(zero)
                .years_to_maturity(5.0 + i as f64)
                .build()
                .expect("valid bench bond")
        })
        .collect();
    c.bench_function("compute_batch_20_zero_coupon", |b| {
        b.iter(|| compute_batch(black_box(&zeros)))
    });
}

criterion_group!(benches, bench_yield_solve, bench_single_bond, bench_batch);
criterion_main!(benches);
