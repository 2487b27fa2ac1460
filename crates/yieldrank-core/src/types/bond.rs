//! Bond specification.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Longest maturity accepted, in years.
pub const MAX_YEARS_TO_MATURITY: f64 = 200.0;

/// Caller-supplied label for a bond.
///
/// Carries no meaning for the analytics; it is echoed back in results so
/// callers can match outputs to inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondId(String);

impl BondId {
    /// Creates a new bond identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BondId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BondId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Input description of an annual-pay, fixed-coupon bullet bond.
///
/// All rates are decimal fractions per annual period (`0.05` for 5%).
/// Construction validates:
///
/// - `face_value > 0` and `price > 0`
/// - `coupon_rate >= 0`
/// - `0 <= tax_rate < 1`
/// - `1 <= years_to_maturity <= 200`, finite
///
/// Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBondSpec")]
pub struct BondSpec {
    id: BondId,
    face_value: Decimal,
    price: Decimal,
    coupon_rate: Decimal,
    tax_rate: Decimal,
    years_to_maturity: f64,
}

/// Unvalidated field bag used for deserialization.
#[derive(Deserialize)]
struct RawBondSpec {
    #[serde(default)]
    id: BondId,
    face_value: Decimal,
    price: Decimal,
    #[serde(default)]
    coupon_rate: Decimal,
    #[serde(default)]
    tax_rate: Decimal,
    years_to_maturity: f64,
}

impl TryFrom<RawBondSpec> for BondSpec {
    type Error = CoreError;

    fn try_from(raw: RawBondSpec) -> CoreResult<Self> {
        Self::new(
            raw.id,
            raw.face_value,
            raw.price,
            raw.coupon_rate,
            raw.tax_rate,
            raw.years_to_maturity,
        )
    }
}

impl BondSpec {
    /// Creates a validated bond specification.
    pub fn new(
        id: impl Into<BondId>,
        face_value: Decimal,
        price: Decimal,
        coupon_rate: Decimal,
        tax_rate: Decimal,
        years_to_maturity: f64,
    ) -> CoreResult<Self> {
        let spec = Self {
            id: id.into(),
            face_value,
            price,
            coupon_rate,
            tax_rate,
            years_to_maturity,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> BondSpecBuilder {
        BondSpecBuilder::default()
    }

    /// Checks every invariant, reporting the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.face_value <= Decimal::ZERO {
            return Err(CoreError::invalid_bond_spec(format!(
                "face value must be positive, got {}",
                self.face_value
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(CoreError::invalid_bond_spec(format!(
                "price must be positive, got {}",
                self.price
            )));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(CoreError::invalid_bond_spec(format!(
                "coupon rate must not be negative, got {}",
                self.coupon_rate
            )));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate >= Decimal::ONE {
            return Err(CoreError::invalid_bond_spec(format!(
                "tax rate must be in [0, 1), got {}",
                self.tax_rate
            )));
        }
        if !self.years_to_maturity.is_finite()
            || self.years_to_maturity < 1.0
            || self.years_to_maturity > MAX_YEARS_TO_MATURITY
        {
            return Err(CoreError::invalid_bond_spec(format!(
                "years to maturity must be in [1, {MAX_YEARS_TO_MATURITY}], got {}",
                self.years_to_maturity
            )));
        }
        if self.total_payout().and_then(|total| total.checked_div(self.price)).is_none() {
            return Err(CoreError::invalid_bond_spec(format!(
                "face {} at coupon {} over {} periods (price {}) exceeds the decimal range",
                self.face_value,
                self.coupon_rate,
                self.periods(),
                self.price
            )));
        }
        Ok(())
    }

    /// Undiscounted coupons plus face, or `None` when out of range.
    fn total_payout(&self) -> Option<Decimal> {
        self.face_value
            .checked_mul(self.coupon_rate)?
            .checked_mul(Decimal::from(self.periods()))?
            .checked_add(self.face_value)
    }

    /// Returns the identifier.
    pub fn id(&self) -> &BondId {
        &self.id
    }

    /// Returns the face (redemption) value.
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the purchase price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the coupon rate per period.
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Returns the flat tax rate applied to coupon income.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Returns the years to maturity as supplied.
    pub fn years_to_maturity(&self) -> f64 {
        self.years_to_maturity
    }

    /// Number of annual periods: years rounded half away from zero.
    pub fn periods(&self) -> u32 {
        self.years_to_maturity.round() as u32
    }

    /// Periodic coupon amount, `face_value * coupon_rate`.
    pub fn coupon_amount(&self) -> Decimal {
        self.face_value.saturating_mul(self.coupon_rate)
    }

    /// Returns a copy with a different tax rate.
    pub fn with_tax_rate(&self, tax_rate: Decimal) -> CoreResult<Self> {
        Self::new(
            self.id.clone(),
            self.face_value,
            self.price,
            self.coupon_rate,
            tax_rate,
            self.years_to_maturity,
        )
    }
}

impl fmt::Display for BondSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: face {} @ {} coupon {} for {}y",
            self.id, self.face_value, self.price, self.coupon_rate, self.years_to_maturity
        )
    }
}

/// Builder for [`BondSpec`].
///
/// Coupon and tax rates default to zero; face value, price and maturity
/// are required.
#[derive(Debug, Clone, Default)]
pub struct BondSpecBuilder {
    id: Option<BondId>,
    face_value: Option<Decimal>,
    price: Option<Decimal>,
    coupon_rate: Option<Decimal>,
    tax_rate: Option<Decimal>,
    years_to_maturity: Option<f64>,
}

impl BondSpecBuilder {
    /// Sets the identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<BondId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the coupon rate (fraction per period).
    #[must_use]
    pub fn coupon_rate(mut self, coupon_rate: Decimal) -> Self {
        self.coupon_rate = Some(coupon_rate);
        self
    }

    /// Sets the tax rate (fraction in `[0, 1)`).
    #[must_use]
    pub fn tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }

    /// Sets the years to maturity.
    #[must_use]
    pub fn years_to_maturity(mut self, years: f64) -> Self {
        self.years_to_maturity = Some(years);
        self
    }

    /// Builds and validates the specification.
    pub fn build(self) -> CoreResult<BondSpec> {
        let face_value = self
            .face_value
            .ok_or_else(|| CoreError::invalid_bond_spec("face value is required"))?;
        let price = self
            .price
            .ok_or_else(|| CoreError::invalid_bond_spec("price is required"))?;
        let years = self
            .years_to_maturity
            .ok_or_else(|| CoreError::invalid_bond_spec("years to maturity is required"))?;

        BondSpec::new(
            self.id.unwrap_or_default(),
            face_value,
            price,
            self.coupon_rate.unwrap_or(Decimal::ZERO),
            self.tax_rate.unwrap_or(Decimal::ZERO),
            years,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> BondSpecBuilder {
        BondSpec::builder()
            .id("B1")
            .face_value(dec!(1000))
            .price(dec!(950))
            .coupon_rate(dec!(0.05))
            .tax_rate(dec!(0.2))
            .years_to_maturity(5.0)
    }

    #[test]
    fn test_builder_valid() {
        let bond = sample().build().unwrap();
        assert_eq!(bond.id().as_str(), "B1");
        assert_eq!(bond.coupon_amount(), dec!(50));
        assert_eq!(bond.periods(), 5);
    }

    #[test]
    fn test_builder_defaults() {
        let bond = BondSpec::builder()
            .face_value(dec!(100))
            .price(dec!(80))
            .years_to_maturity(3.0)
            .build()
            .unwrap();
        assert_eq!(bond.coupon_rate(), Decimal::ZERO);
        assert_eq!(bond.tax_rate(), Decimal::ZERO);
        assert_eq!(bond.id().as_str(), "");
    }

    #[test]
    fn test_missing_price() {
        let err = BondSpec::builder()
            .face_value(dec!(100))
            .years_to_maturity(3.0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("price is required"));
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        assert!(sample().price(dec!(0)).build().is_err());
        assert!(sample().price(dec!(-1)).build().is_err());
        assert!(sample().face_value(dec!(0)).build().is_err());
    }

    #[test]
    fn test_tax_rate_bounds() {
        assert!(sample().tax_rate(dec!(0)).build().is_ok());
        assert!(sample().tax_rate(dec!(0.999)).build().is_ok());
        assert!(sample().tax_rate(dec!(1)).build().is_err());
        assert!(sample().tax_rate(dec!(-0.1)).build().is_err());
    }

    #[test]
    fn test_years_bounds() {
        assert!(sample().years_to_maturity(0.5).build().is_err());
        assert!(sample().years_to_maturity(-3.0).build().is_err());
        assert!(sample().years_to_maturity(f64::NAN).build().is_err());
        assert!(sample().years_to_maturity(250.0).build().is_err());
        assert!(sample().years_to_maturity(1.0).build().is_ok());
    }

    #[test]
    fn test_negative_coupon_rejected() {
        assert!(sample().coupon_rate(dec!(-0.01)).build().is_err());
    }

    #[test]
    fn test_periods_round_half_away_from_zero() {
        assert_eq!(sample().years_to_maturity(4.4).build().unwrap().periods(), 4);
        assert_eq!(sample().years_to_maturity(4.5).build().unwrap().periods(), 5);
        assert_eq!(sample().years_to_maturity(1.2).build().unwrap().periods(), 1);
    }

    #[test]
    fn test_periods_from_date_span() {
        use crate::types::years_between;
        use chrono::NaiveDate;

        // 950 days is about 2.6 years, which rounds up to three annual periods
        let purchase = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let maturity = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let years = years_between(purchase, maturity).unwrap();
        assert!((years - 2.601).abs() < 1e-3);

        let bond = sample().years_to_maturity(years).build().unwrap();
        assert_eq!(bond.periods(), 3);
    }

    #[test]
    fn test_rejects_payout_beyond_decimal_range() {
        let err = sample()
            .face_value(dec!(10_000_000_000_000_000_000_000_000_000))
            .price(dec!(9_000_000_000_000_000_000_000_000_000))
            .coupon_rate(dec!(0.5))
            .years_to_maturity(20.0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("exceeds the decimal range"));

        let tiny_price = sample()
            .face_value(dec!(10_000_000_000_000_000_000_000))
            .price(dec!(0.0000000001))
            .build();
        assert!(tiny_price.is_err());
    }

    #[test]
    fn test_with_tax_rate() {
        let bond = sample().build().unwrap();
        let untaxed = bond.with_tax_rate(Decimal::ZERO).unwrap();
        assert_eq!(untaxed.tax_rate(), Decimal::ZERO);
        assert_eq!(untaxed.price(), bond.price());
        assert!(bond.with_tax_rate(dec!(1.5)).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BondSpec = serde_json::from_str(
            r#"{"id":"X","face_value":100,"price":99.5,"coupon_rate":0.04,"years_to_maturity":3}"#,
        )
        .unwrap();
        assert_eq!(ok.price(), dec!(99.5));
        assert_eq!(ok.coupon_rate(), dec!(0.04));

        let bad = serde_json::from_str::<BondSpec>(
            r#"{"face_value":100,"price":-1,"years_to_maturity":3}"#,
        );
        assert!(bad.is_err());
    }
}
