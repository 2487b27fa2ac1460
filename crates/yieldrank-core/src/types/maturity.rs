//! Years-to-maturity from calendar dates.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

/// Average days per year used to convert a date span into years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Years between purchase and maturity, as `days / 365.25`.
///
/// Fails when maturity is not strictly after purchase.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use yieldrank_core::types::years_between;
///
/// let purchase = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let maturity = NaiveDate::from_ymd_opt(2029, 1, 1).unwrap();
/// let years = years_between(purchase, maturity).unwrap();
/// assert!((years - 5.0).abs() < 0.01);
/// ```
pub fn years_between(purchase: NaiveDate, maturity: NaiveDate) -> CoreResult<f64> {
    let days = (maturity - purchase).num_days();
    if days <= 0 {
        return Err(CoreError::invalid_date(format!(
            "maturity {maturity} must be after purchase {purchase}"
        )));
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}
