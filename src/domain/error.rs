//! Domain Error Types
//!
//! Pure domain errors that don't depend on the driver or configuration.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Domain-specific errors
///
/// These errors represent business rule violations and domain invariant failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Withdrawal exceeds what the account allows
    #[error("{reason}")]
    InsufficientFunds {
        reason: String,
        requested: Decimal,
        available: Decimal,
    },

    /// Invalid amount (zero, negative, or exceeds limit)
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Account not found on the customer
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Customer already holds an account with this number
    #[error("Duplicate account number: {0}")]
    DuplicateAccount(String),

    /// Account belongs to a different customer
    #[error("Account {0} is owned by another customer")]
    OwnerMismatch(String),

    /// Balance would leave the representable decimal range
    #[error("Balance overflow on account {0}")]
    BalanceOverflow(String),
}

impl DomainError {
    /// Shortfall on a savings account (no overdraft)
    pub fn insufficient_savings(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            reason: "Insufficient funds in savings account".to_string(),
            requested,
            available,
        }
    }

    /// Shortfall on a current account, `available` includes the overdraft
    pub fn overdraft_exceeded(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            reason: "Exceeds overdraft limit".to_string(),
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_savings_message() {
        let err = DomainError::insufficient_savings(Decimal::new(100, 0), Decimal::new(50, 0));

        assert_eq!(err.to_string(), "Insufficient funds in savings account");
        assert!(matches!(
            err,
            DomainError::InsufficientFunds { requested, available, .. }
                if requested == Decimal::new(100, 0) && available == Decimal::new(50, 0)
        ));
    }

    #[test]
    fn test_overdraft_exceeded_message() {
        let err = DomainError::overdraft_exceeded(Decimal::new(10000, 0), Decimal::new(5000, 0));
        assert_eq!(err.to_string(), "Exceeds overdraft limit");
    }

    #[test]
    fn test_invalid_amount_from_amount_error() {
        let err: DomainError = AmountError::NotPositive(Decimal::ZERO).into();
        assert!(err.to_string().starts_with("Invalid amount:"));
    }

    #[test]
    fn test_account_errors_name_the_account() {
        let err = DomainError::DuplicateAccount("SA001".to_string());
        assert!(err.to_string().contains("SA001"));

        let err = DomainError::BalanceOverflow("CA001".to_string());
        assert_eq!(err.to_string(), "Balance overflow on account CA001");
    }
}
