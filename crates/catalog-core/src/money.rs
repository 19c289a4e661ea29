//! # Money Module
//!
//! Provides the two representations of a price.
//!
//! ## Two Forms, One Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DECIMAL FORM (what people type)      MINOR-UNIT FORM (what we store)  │
//! │                                                                         │
//! │    Decimal(19.99)  ── from_decimal ──►  Money(1999)                     │
//! │    Decimal(19.99)  ◄── to_decimal ───   Money(1999)                     │
//! │                                                                         │
//! │  Invariant: minor = round(decimal × 100)                                │
//! │                                                                         │
//! │  Only Money is ever stored. Decimal exists at the API edge and is       │
//! │  always rendered with exactly two fractional digits: "1299.00".         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::{Decimal, Money};
//!
//! let price = Money::from_decimal(Decimal::new(19.99));
//! assert_eq!(price.cents(), 1999);
//! assert_eq!(price.to_decimal().to_string(), "19.99");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: same width as the stored record field
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(129900);
    /// assert_eq!(price.cents(), 129900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount to minor units.
    ///
    /// The product `decimal × 100` is rounded to the nearest cent. A plain
    /// truncating cast would turn `19.99` into `1998` because
    /// `19.99 × 100 == 1998.9999999999998` in binary floating point.
    /// Inputs with more than two fractional digits lose the excess silently.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::{Decimal, Money};
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(1299.0)).cents(), 129900);
    /// assert_eq!(Money::from_decimal(Decimal::new(0.29)).cents(), 29);
    /// assert_eq!(Money::from_decimal(Decimal::new(1.005)).cents(), 100);
    /// ```
    #[inline]
    pub fn from_decimal(decimal: Decimal) -> Self {
        Money((decimal.value() * 100.0).round() as i64)
    }

    /// Converts minor units back to the decimal form (divides by 100).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0 as f64 / 100.0)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

/// Renders the exact integer form with two fractional digits, no symbol.
///
/// Goes through integer arithmetic only, so `Money::from_cents(129900)`
/// always prints `1299.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Decimal Type
// =============================================================================

/// The human-facing decimal form of a price.
///
/// ## Wire Format
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Input  (any JSON number):    "price": 1299      "price": 19.99         │
/// │  Output (exactly 2 digits):   "price": 1299.00   "price": 19.99         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Serialization emits a raw JSON number so that trailing zeros survive;
/// plain `f64` serialization would print `1299.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, TS)]
#[ts(export)]
pub struct Decimal(f64);

impl Decimal {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Decimal(value)
    }

    /// Returns the raw floating point amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns true unless the amount is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Renders the amount with exactly two fractional digits.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Decimal;
    ///
    /// assert_eq!(Decimal::new(1299.0).format(), "1299.00");
    /// assert_eq!(Decimal::new(19.99).format(), "19.99");
    /// assert_eq!(Decimal::new(1100.5).format(), "1100.50");
    /// ```
    pub fn format(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // NaN and infinities have no JSON number form and fail here
        let raw = RawValue::from_string(self.format()).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_decimal_does_not_lose_a_cent() {
        // 19.99 * 100 is 1998.9999999999998 in f64
        assert_eq!(Money::from_decimal(Decimal::new(19.99)).cents(), 1999);
        assert_eq!(Money::from_decimal(Decimal::new(0.29)).cents(), 29);
        assert_eq!(Money::from_decimal(Decimal::new(1899.99)).cents(), 189999);
    }

    #[test]
    fn test_from_decimal_drops_extra_precision() {
        assert_eq!(Money::from_decimal(Decimal::new(10.994)).cents(), 1099);
        assert_eq!(Money::from_decimal(Decimal::new(10.996)).cents(), 1100);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(Money::from_cents(129900).to_decimal(), Decimal::new(1299.0));
        assert_eq!(Money::from_cents(64999).to_decimal(), Decimal::new(649.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(129900).to_string(), "1299.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_decimal_format_always_two_digits() {
        assert_eq!(Decimal::new(1299.0).to_string(), "1299.00");
        assert_eq!(Decimal::new(0.1).to_string(), "0.10");
        assert_eq!(Decimal::new(649.99).format(), "649.99");
    }

    #[test]
    fn test_decimal_serializes_as_number_with_trailing_zeros() {
        let json = serde_json::to_string(&Decimal::new(1299.0)).unwrap();
        assert_eq!(json, "1299.00");

        let json = serde_json::to_string(&Decimal::new(19.99)).unwrap();
        assert_eq!(json, "19.99");
    }

    #[test]
    fn test_decimal_rejects_non_finite_on_serialize() {
        assert!(serde_json::to_string(&Decimal::new(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Decimal::new(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_decimal_deserializes_from_integer_and_float() {
        let whole: Decimal = serde_json::from_str("1299").unwrap();
        assert_eq!(whole, Decimal::new(1299.0));

        let fractional: Decimal = serde_json::from_str("19.99").unwrap();
        assert_eq!(fractional, Decimal::new(19.99));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Money::default(), Money::zero());
        assert_eq!(Money::default().cents(), 0);
    }

    proptest! {
        /// Any amount with at most two fractional digits survives the trip
        /// through minor units unchanged.
        #[test]
        fn prop_two_digit_decimals_round_trip(cents in 1i64..100_000_000_000) {
            let decimal: f64 = format!("{}.{:02}", cents / 100, cents % 100).parse().unwrap();
            let money = Money::from_decimal(Decimal::new(decimal));
            prop_assert_eq!(money.cents(), cents);
            prop_assert_eq!(money.to_decimal(), Decimal::new(decimal));
        }
    }
}
