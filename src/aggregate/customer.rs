//! Customer Aggregate
//!
//! A customer owns an ordered collection of accounts. Insertion order is
//! display order.

use uuid::Uuid;

use crate::domain::DomainError;

use super::Account;

/// Customer Aggregate
#[derive(Debug, Clone)]
pub struct Customer {
    /// Unique customer ID
    id: Uuid,

    /// Full name
    name: String,

    /// Tax identifier (PAN)
    tax_id: String,

    /// Owned accounts, in the order they were added
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tax_id: tax_id.into(),
            accounts: Vec::new(),
        }
    }

    /// Attach an account to this customer.
    ///
    /// # Errors
    /// - `DomainError::OwnerMismatch` if the account was opened for someone else
    /// - `DomainError::DuplicateAccount` if the number is already held
    pub fn add_account(&mut self, account: Account) -> Result<(), DomainError> {
        if account.owner_id() != self.id {
            return Err(DomainError::OwnerMismatch(account.number().to_string()));
        }

        if self.accounts.iter().any(|a| a.number() == account.number()) {
            return Err(DomainError::DuplicateAccount(account.number().to_string()));
        }

        tracing::debug!(
            customer = %self.id,
            account = %account.number(),
            kind = account.kind().name(),
            "Account attached"
        );
        self.accounts.push(account);
        Ok(())
    }

    /// Look up an account by number
    pub fn account(&self, number: &str) -> Result<&Account, DomainError> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))
    }

    /// Look up an account by number for mutation
    pub fn account_mut(&mut self, number: &str) -> Result<&mut Account, DomainError> {
        self.accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))
    }

    /// Summary line per account, in insertion order
    pub fn display_accounts(&self, currency: &str) -> Vec<String> {
        self.accounts.iter().map(|a| a.summary(currency)).collect()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
