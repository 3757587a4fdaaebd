//! Cent-denominated prices.
//!
//! Prices are whole cents held in a `u64`, so they can never be negative and
//! never pick up floating-point rounding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    /// Create an amount from a number of cents.
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Zero cents.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw number of cents.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(self, factor: u64) -> Option<Cents> {
        self.0.checked_mul(factor).map(Cents)
    }

    /// Add another amount, returning None on overflow.
    pub fn try_add(self, other: Cents) -> Option<Cents> {
        self.0.checked_add(other.0).map(Cents)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum(mut iter: impl Iterator<Item = Cents>) -> Option<Cents> {
        iter.try_fold(Cents::zero(), |acc, c| acc.try_add(c))
    }

    /// Format as dollars (e.g., "$49.99").
    pub fn display(self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format as dollars without the symbol (e.g., "49.99").
    pub fn display_amount(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_display() {
        assert_eq!(Cents::new(4999).display(), "$49.99");
        assert_eq!(Cents::new(500).display(), "$5.00");
        assert_eq!(Cents::new(7).display(), "$0.07");
        assert_eq!(Cents::zero().display_amount(), "0.00");
    }

    #[test]
    fn test_cents_multiply() {
        assert_eq!(Cents::new(500).try_multiply(3), Some(Cents::new(1500)));
        assert_eq!(Cents::new(u64::MAX).try_multiply(2), None);
    }

    #[test]
    fn test_cents_try_sum() {
        let total = Cents::try_sum([Cents::new(100), Cents::new(250)].into_iter());
        assert_eq!(total, Some(Cents::new(350)));

        let overflow = Cents::try_sum([Cents::new(u64::MAX), Cents::new(1)].into_iter());
        assert_eq!(overflow, None);

        assert_eq!(Cents::try_sum(std::iter::empty()), Some(Cents::zero()));
    }

    #[test]
    fn test_cents_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Cents::new(500)).unwrap(), "500");
        assert!(serde_json::from_str::<Cents>("-5").is_err());
    }
}
