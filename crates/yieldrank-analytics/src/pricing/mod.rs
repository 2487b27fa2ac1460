//! Present value of a cash flow schedule at a flat annual rate.
//!
//! ```text
//! PV(r)  =  Σ CF_t / (1 + r)^t
//! PV'(r) = -Σ t · CF_t / (1 + r)^(t+1)
//! ```
//!
//! Both take `(time, amount)` pairs as produced by
//! [`CashFlowSchedule::to_f64_pairs`](yieldrank_core::types::CashFlowSchedule::to_f64_pairs).

/// Present value of `flows` at annual rate `rate`.
///
/// Returns `NaN` when `rate <= -1`.
pub fn present_value(flows: &[(f64, f64)], rate: f64) -> f64 {
    if rate <= -1.0 {
        return f64::NAN;
    }
    let base = 1.0 + rate;
    flows.iter().map(|&(t, cf)| cf * base.powf(-t)).sum()
}

/// Derivative of [`present_value`] with respect to the rate.
pub fn pv_derivative(flows: &[(f64, f64)], rate: f64) -> f64 {
    if rate <= -1.0 {
        return f64::NAN;
    }
    let base = 1.0 + rate;
    flows
        .iter()
        .map(|&(t, cf)| -t * cf * base.powf(-t - 1.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FIVE_YEAR: [(f64, f64); 5] = [
        (1.0, 50.0),
        (2.0, 50.0),
        (3.0, 50.0),
        (4.0, 50.0),
        (5.0, 1050.0),
    ];

    #[test]
    fn test_par_rate_prices_at_face() {
        assert_relative_eq!(present_value(&FIVE_YEAR, 0.05), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_undiscounted_sum() {
        assert_relative_eq!(present_value(&FIVE_YEAR, 0.0), 1250.0, epsilon = 1e-12);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        let numeric =
            (present_value(&FIVE_YEAR, 0.06 + h) - present_value(&FIVE_YEAR, 0.06 - h)) / (2.0 * h);
        assert_relative_eq!(pv_derivative(&FIVE_YEAR, 0.06), numeric, max_relative = 1e-6);
    }

    #[test]
    fn test_rate_at_or_below_minus_one() {
        assert!(present_value(&FIVE_YEAR, -1.0).is_nan());
        assert!(pv_derivative(&FIVE_YEAR, -1.5).is_nan());
    }
}
