//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{ExpenseError, ExpenseResult};

/// Upper bound for a single expense or budget ceiling: $100,000.00
pub const MAX_AMOUNT: Money = Money::from_cents(10_000_000);

/// Represents a monetary amount stored as cents (hundredths of a dollar)
///
/// Using i64 cents keeps two-decimal precision exact. Recorded amounts are
/// always positive; differences (budget remaining) may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Convert to a float dollar value (for JSON export only)
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Create from a float dollar value, rounding to cents
    ///
    /// Rejects NaN and infinite inputs.
    pub fn from_f64(dollars: f64) -> ExpenseResult<Self> {
        if !dollars.is_finite() {
            return Err(ExpenseError::validation("amount", "must be a number"));
        }
        Ok(Self((dollars * 100.0).round() as i64))
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts formats: "10.50", "10.5", "10", "-10.50", "$10.50"
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let invalid = || ExpenseError::validation("amount", format!("'{}' is not a valid amount", s));

        let cents = match s.split_once('.') {
            Some((dollars, frac)) => {
                let dollars: i64 = dollars.parse().map_err(|_| invalid())?;
                // The sign lives before the dollars; "0.-5" is not a number
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let frac_cents: i64 = match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse().map_err(|_| invalid())?,
                    _ => return Err(invalid()),
                };
                dollars * 100 + frac_cents
            }
            None => {
                let dollars: i64 = s.parse().map_err(|_| invalid())?;
                dollars * 100
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Validate as a recorded expense amount: > 0 and at most [`MAX_AMOUNT`]
    pub fn validate_expense_amount(&self) -> ExpenseResult<()> {
        if !self.is_positive() || *self > MAX_AMOUNT {
            return Err(ExpenseError::validation(
                "amount",
                format!("must be positive and not exceed ${}", MAX_AMOUNT),
            ));
        }
        Ok(())
    }

    /// Validate as a budget ceiling: > 0 and at most [`MAX_AMOUNT`]
    pub fn validate_budget_amount(&self) -> ExpenseResult<()> {
        if !self.is_positive() || *self > MAX_AMOUNT {
            return Err(ExpenseError::validation(
                "amount",
                format!("budget has to be greater than $0 and at most ${}", MAX_AMOUNT),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    /// Formats as a plain two-decimal value, e.g. "1234.56" or "-0.50"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// The budget ledger persists amounts as two-decimal JSON numbers, matching
// the on-disk format the tracker has always used.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Money::from_f64(dollars).map_err(serde::de::Error::custom)
    }
}
