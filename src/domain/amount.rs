//! Amount type
//!
//! Domain primitives for monetary values.
//! `Amount` is validated at construction time, so a non-positive deposit or
//! withdrawal cannot reach an account.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Amount represents a validated monetary value.
///
/// # Invariants
/// - Value is always positive (> 0)
///
/// Scale and magnitude are whatever `Decimal` can hold.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use banking_system::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self.0))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| AmountError::ParseError(e.to_string()))?;
        Amount::new(decimal)
    }
}

/// Balance represents an account balance.
/// Unlike Amount, Balance can be zero or negative (current accounts run
/// into their overdraft).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check whether `amount` fits within the balance plus `headroom`.
    ///
    /// The limit is inclusive: withdrawing exactly the available funds succeeds.
    pub fn covers(&self, amount: &Amount, headroom: Decimal) -> bool {
        self.0
            .checked_add(headroom)
            .map_or(true, |limit| amount.value() <= limit)
    }

    /// Move the balance by a signed delta, `None` if `Decimal` would overflow
    pub fn checked_move(&self, delta: Decimal) -> Option<Balance> {
        self.0.checked_add(delta).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self.0))
    }
}

/// At least two decimal places, more only when the value carries them
pub(crate) fn format_money(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() < 2 {
        format!("{:.2}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(Decimal::new(100, 0));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), Decimal::new(100, 0));
    }

    #[test]
    fn test_amount_zero_rejected() {
        let amount = Amount::new(Decimal::ZERO);
        assert!(matches!(amount, Err(AmountError::NotPositive(_))));
    }

    #[test]
    fn test_amount_negative_rejected() {
        let amount = Amount::new(Decimal::new(-100, 0));
        assert!(matches!(amount, Err(AmountError::NotPositive(_))));
    }

    #[test]
    fn test_amount_accepts_any_positive_scale_and_size() {
        // 0.123456789 has 9 decimal places
        assert!(Amount::new(Decimal::new(123456789, 9)).is_ok());
        assert!(Amount::new(Decimal::new(2_000_000_000_000, 0)).is_ok());
        assert!(Amount::new(Decimal::MAX).is_ok());
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Result<Amount, _> = " 123.456 ".parse();
        assert_eq!(amount.unwrap().value(), Decimal::new(123456, 3));

        let bad: Result<Amount, _> = "12x".parse();
        assert!(matches!(bad, Err(AmountError::ParseError(_))));

        let negative: Result<Amount, _> = "-1".parse();
        assert!(matches!(negative, Err(AmountError::NotPositive(_))));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(1400, 0)), "1400.00");
        assert_eq!(format_money(Decimal::new(14000, 1)), "1400.00");
        assert_eq!(format_money(Decimal::new(1035, 11)), "0.00000001035");
        assert_eq!(format_money(Decimal::new(-20000, 0)), "-20000.00");
    }

    #[test]
    fn test_balance_checked_move() {
        let balance = Balance::zero()
            .checked_move(Decimal::new(100, 0))
            .and_then(|b| b.checked_move(Decimal::new(-130, 0)))
            .unwrap();

        assert_eq!(balance.value(), Decimal::new(-30, 0));
        assert_eq!(balance.to_string(), "-30.00");
        assert!(Balance::zero()
            .checked_move(Decimal::MAX)
            .and_then(|b| b.checked_move(Decimal::ONE))
            .is_none());
    }

    #[test]
    fn test_balance_covers_is_inclusive() {
        let balance = Balance::zero().checked_move(Decimal::new(50, 0)).unwrap();
        let exact = Amount::new(Decimal::new(50, 0)).unwrap();
        let over = Amount::new(Decimal::new(51, 0)).unwrap();

        assert!(balance.covers(&exact, Decimal::ZERO));
        assert!(!balance.covers(&over, Decimal::ZERO));
        assert!(balance.covers(&over, Decimal::ONE));
    }
}
