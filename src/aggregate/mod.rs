//! Aggregate module
//!
//! Customer is the aggregate root; it owns its accounts.

pub mod account;
pub mod customer;

pub use account::{Account, AccountKind, InterestOutcome};
pub use customer::Customer;

use rust_decimal::Decimal;

use crate::domain::{Balance, DomainError};

/// Ledger operations every account variant supports.
///
/// Amounts arrive as raw decimals and are validated by the implementor, so a
/// zero or negative amount fails with `DomainError::InvalidAmount` before any
/// state changes.
pub trait Transactional {
    /// Credit the account, returning the new balance
    fn deposit(&mut self, amount: Decimal) -> Result<Balance, DomainError>;

    /// Debit the account if the variant's limit allows it, returning the new balance
    fn withdraw(&mut self, amount: Decimal) -> Result<Balance, DomainError>;

    /// Post interest according to the variant's rule
    fn calculate_interest(&mut self) -> Result<InterestOutcome, DomainError>;
}
