//! Money type for representing prices and totals.
//!
//! Amounts are held as integer cents so that cart arithmetic is exact.
//! The backend speaks decimal JSON numbers (`9.99`); conversion happens
//! only at the serde boundary.

use crate::error::CommerceError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A non-negative monetary amount in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    amount_cents: i64,
}

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money { amount_cents: 0 };

    /// Create a Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use shop_commerce::Money;
    /// let price = Money::from_decimal(9.99).unwrap();
    /// assert_eq!(price.cents(), 999);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount));
        }
        Ok(Self::from_cents((amount * 100.0).round() as i64))
    }

    /// Amount in cents.
    pub fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money::from_cents(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format without the currency symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(9.99).unwrap().cents(), 999);
        assert_eq!(Money::from_decimal(4.5).unwrap().cents(), 450);
        assert_eq!(Money::from_decimal(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_money_rejects_negative_and_nan() {
        assert!(matches!(
            Money::from_decimal(-1.0),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(Money::from_decimal(f64::NAN).is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(2448).display(), "$24.48");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::from_cents(2500).to_string(), "$25.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let price = Money::from_cents(999);
        assert_eq!((price * 2).cents(), 1998);
        assert_eq!((price + Money::from_cents(1)).cents(), 1000);

        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_money_times_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(huge.times(4).cents(), i64::MAX);
    }

    #[test]
    fn test_money_json_is_decimal_number() {
        let m: Money = serde_json::from_str("19.5").unwrap();
        assert_eq!(m.cents(), 1950);
        assert_eq!(serde_json::to_string(&m).unwrap(), "19.5");
        assert!(serde_json::from_str::<Money>("-3").is_err());
    }
}
