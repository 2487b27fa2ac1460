//! End-to-end checks against independently computed reference values.

use approx::assert_relative_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use yieldrank_analytics::prelude::*;
use yieldrank_core::types::{BondId, BondSpec};

fn spec(id: &str, face: Decimal, price: Decimal, coupon: Decimal, tax: Decimal, years: f64) -> BondSpec {
    BondSpec::builder()
        .id(id)
        .face_value(face)
        .price(price)
        .coupon_rate(coupon)
        .tax_rate(tax)
        .years_to_maturity(years)
        .build()
        .unwrap()
}

#[test]
fn discount_bond_matches_reference() {
    let bond = spec("REF", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0);
    let m = compute_single_bond(&bond).unwrap();

    assert_relative_eq!(m.ytm, 0.061_932_3, epsilon = 0.01);
    assert_relative_eq!(m.duration, 4.532_45, epsilon = 0.01);
    assert_relative_eq!(m.modified_duration, 4.268_12, epsilon = 0.01);
    assert_relative_eq!(m.ytm_after_tax, 0.051_599_9, epsilon = 0.01);
    assert_relative_eq!(m.net_total_return_after_tax, 0.263_157_9, epsilon = 0.01);
    assert_relative_eq!(m.ytm_duration_ratio.unwrap(), 0.011_384_5, epsilon = 0.001);
}

#[test]
fn par_bond_yields_coupon_before_and_after_tax() {
    let bond = spec("PAR", dec!(1000), dec!(1000), dec!(0.04), dec!(0.25), 10.0);
    let m = compute_single_bond(&bond).unwrap();

    assert_relative_eq!(m.ytm, 0.04, epsilon = 1e-6);
    assert_relative_eq!(m.ytm_after_tax, 0.03, epsilon = 1e-6);
}

#[test]
fn zero_coupon_duration_equals_maturity() {
    let bond = spec("ZERO", dec!(100), dec!(61.39), Decimal::ZERO, dec!(0.3), 10.0);
    let m = compute_single_bond(&bond).unwrap();

    assert_relative_eq!(m.duration, 10.0, epsilon = 1e-9);
    // No coupon to tax
    assert_relative_eq!(m.ytm_after_tax, m.ytm, epsilon = 1e-6);
    let closed_form = (100.0_f64 / 61.39).powf(0.1) - 1.0;
    assert_relative_eq!(m.ytm, closed_form, epsilon = 1e-6);
}

#[test]
fn feasible_negative_yield() {
    let bond = spec("NEG", dec!(100), dec!(105), Decimal::ZERO, Decimal::ZERO, 2.0);
    let m = compute_single_bond(&bond).unwrap();
    assert!(m.ytm < 0.0);
    assert_relative_eq!(m.ytm, -0.024_1, epsilon = 1e-4);
}

#[test]
fn infeasible_yields_are_convergence_errors() {
    let too_cheap = spec("CHEAP", dec!(100), dec!(5), Decimal::ZERO, Decimal::ZERO, 1.0);
    assert!(compute_single_bond(&too_cheap).unwrap_err().is_convergence());

    let too_rich = spec("RICH", dec!(100), dec!(20000), Decimal::ZERO, Decimal::ZERO, 1.0);
    assert!(compute_single_bond(&too_rich).unwrap_err().is_convergence());
}

#[test]
fn price_equal_to_total_gives_zero_yield() {
    let bond = spec("FLAT", dec!(100), dec!(115), dec!(0.05), Decimal::ZERO, 3.0);
    let m = compute_single_bond(&bond).unwrap();
    assert_eq!(m.yield_iterations, 0);
    assert!(m.ytm.abs() < f64::EPSILON);
}

#[test]
fn batch_size_limits() {
    assert!(compute_batch(&[]).unwrap_err().is_validation());

    let bonds: Vec<BondSpec> = (0..=MAX_BATCH_SIZE)
        .map(|i| spec(&format!("B{i}"), dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0))
        .collect();
    assert_eq!(bonds.len(), 21);
    assert!(compute_batch(&bonds).unwrap_err().is_validation());
}

#[test]
fn batch_ties_keep_input_order() {
    let bonds = vec![
        spec("A", dec!(1000), dec!(980), dec!(0.05), dec!(0.2), 5.0),
        spec("B", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0),
        spec("C", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0),
        spec("D", dec!(1000), dec!(1020), dec!(0.05), dec!(0.2), 5.0),
    ];

    let batch = compute_batch(&bonds).unwrap();

    assert_eq!(batch.order(), vec![1, 2, 0, 3]);
    assert_eq!(batch.best().unwrap().id.as_str(), "B");
    assert_eq!(batch.worst().unwrap().id.as_str(), "D");
}

#[test]
fn batch_isolates_non_convergent_bonds() {
    let bonds = vec![
        spec("GOOD", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0),
        spec("BAD", dec!(100), dec!(5), Decimal::ZERO, Decimal::ZERO, 1.0),
        spec("ALSO GOOD", dec!(1000), dec!(990), dec!(0.03), dec!(0.1), 7.0),
    ];

    let batch = compute_batch(&bonds).unwrap();

    assert_eq!(batch.ranked.len(), 2);
    assert_eq!(batch.skipped.len(), 1);
    assert_eq!(batch.skipped[0].index, 1);
}

#[test]
fn rank_evaluated_orders_precomputed_rows() {
    let bond = spec("X", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0);
    let base = compute_single_bond(&bond).unwrap();

    let rows = [0.5, 0.8, 0.8, 0.3]
        .into_iter()
        .enumerate()
        .map(|(i, ratio)| {
            let metrics = BondMetrics {
                ytm_duration_ratio: Some(ratio),
                ..base
            };
            (BondId::new(format!("R{i}")), metrics)
        })
        .collect();

    let batch = rank_evaluated(rows, &AnalyticsConfig::default());
    assert_eq!(batch.order(), vec![1, 2, 0, 3]);
}

#[test]
fn payout_beyond_decimal_range_is_rejected_up_front() {
    let huge = BondSpec::builder()
        .id("HUGE")
        .face_value(dec!(10_000_000_000_000_000_000_000_000_000))
        .price(dec!(9_000_000_000_000_000_000_000_000_000))
        .coupon_rate(dec!(0.5))
        .years_to_maturity(20.0)
        .build();
    assert!(huge.is_err());

    let large = spec(
        "LARGE",
        dec!(100_000_000_000_000_000_000_000_000),
        dec!(90_000_000_000_000_000_000_000_000),
        dec!(0.05),
        Decimal::ZERO,
        20.0,
    );
    let ok = spec("OK", dec!(1000), dec!(950), dec!(0.05), dec!(0.2), 5.0);
    let batch = compute_batch(&[ok, large]).unwrap();
    assert_eq!(batch.ranked.len(), 2);
    assert!(batch.skipped.is_empty());
}
