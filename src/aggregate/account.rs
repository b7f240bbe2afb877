//! Account Aggregate
//!
//! One struct covers both account variants; `AccountKind` carries the
//! variant-specific rule (interest for savings, overdraft for current).

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Amount, AmountError, Balance, DomainError, Transaction};

use super::{Customer, Transactional};

/// Savings interest rate in percent
const SAVINGS_INTEREST_PERCENT: i64 = 35;
const SAVINGS_INTEREST_SCALE: u32 = 1;

/// Account variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Earns a fixed 3.5% interest, no overdraft
    Savings,

    /// May go below zero down to `-overdraft_limit`, earns no interest
    Current { overdraft_limit: Decimal },
}

impl AccountKind {
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current { .. } => "current",
        }
    }

    /// How far below zero the balance may go
    pub fn overdraft_limit(&self) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::ZERO,
            AccountKind::Current { overdraft_limit } => *overdraft_limit,
        }
    }

    /// Interest rate in percent, if the variant earns any
    pub fn interest_rate(&self) -> Option<Decimal> {
        match self {
            AccountKind::Savings => Some(Decimal::new(
                SAVINGS_INTEREST_PERCENT,
                SAVINGS_INTEREST_SCALE,
            )),
            AccountKind::Current { .. } => None,
        }
    }
}

/// Result of `calculate_interest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterestOutcome {
    /// Interest was deposited into the account
    Credited { interest: Amount, balance: Balance },

    /// Savings account with a zero balance
    NothingAccrued,

    /// Variant earns no interest
    NotApplicable,
}

impl InterestOutcome {
    /// Console message for the outcome
    pub fn message(&self, currency: &str) -> String {
        match self {
            InterestOutcome::Credited { interest, .. } => {
                format!("Interest added: {}{}", currency, interest)
            }
            InterestOutcome::NothingAccrued => "No interest accrued on a zero balance".to_string(),
            InterestOutcome::NotApplicable => "Current accounts don't earn interest".to_string(),
        }
    }
}

/// Account Aggregate
///
/// Balance is private and changes only through `Transactional`, and every
/// change appends exactly one transaction to the log.
#[derive(Debug, Clone)]
pub struct Account {
    /// Account number, immutable
    number: String,

    /// Owning customer's id (non-owning reference)
    owner_id: Uuid,

    /// Variant rule
    kind: AccountKind,

    /// Current balance
    balance: Balance,

    /// Append-only transaction log
    transactions: Vec<Transaction>,
}

impl Account {
    /// Open a savings account for `owner`
    pub fn savings(number: impl Into<String>, owner: &Customer) -> Self {
        Self::open(number.into(), owner.id(), AccountKind::Savings)
    }

    /// Open a current account for `owner` with the given overdraft limit.
    ///
    /// # Errors
    /// - `DomainError::InvalidAmount` if the limit is negative
    pub fn current(
        number: impl Into<String>,
        owner: &Customer,
        overdraft_limit: Decimal,
    ) -> Result<Self, DomainError> {
        if overdraft_limit < Decimal::ZERO {
            return Err(AmountError::NotPositive(overdraft_limit).into());
        }

        Ok(Self::open(
            number.into(),
            owner.id(),
            AccountKind::Current { overdraft_limit },
        ))
    }

    fn open(number: String, owner_id: Uuid, kind: AccountKind) -> Self {
        Self {
            number,
            owner_id,
            kind,
            balance: Balance::zero(),
            transactions: Vec::new(),
        }
    }

    /// Append a transaction and move the balance by its signed amount.
    /// Nothing changes if the new balance would overflow.
    fn apply(&mut self, transaction: Transaction) -> Result<Balance, DomainError> {
        let balance = self
            .balance
            .checked_move(transaction.amount())
            .ok_or_else(|| DomainError::BalanceOverflow(self.number.clone()))?;

        self.balance = balance;
        self.transactions.push(transaction);
        Ok(balance)
    }

    /// History lines in insertion order, `"<KIND>: <currency><amount>"`
    pub fn transaction_history(&self, currency: &str) -> Vec<String> {
        self.transactions
            .iter()
            .map(|t| t.render(currency))
            .collect()
    }

    /// Summary line, `"<number> - Balance: <currency><balance>"`
    pub fn summary(&self, currency: &str) -> String {
        format!("{} - Balance: {}{}", self.number, currency, self.balance)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl Transactional for Account {
    fn deposit(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        let balance = self.apply(Transaction::deposit(&amount))?;

        tracing::info!(
            account = %self.number,
            amount = %amount,
            balance = %balance,
            "Deposit recorded"
        );
        Ok(balance)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Balance, DomainError> {
        let amount = Amount::new(amount)?;
        let headroom = self.kind.overdraft_limit();

        if !self.balance.covers(&amount, headroom) {
            let available = self.balance.value().saturating_add(headroom);
            tracing::warn!(
                account = %self.number,
                requested = %amount,
                available = %available,
                "Withdrawal rejected"
            );
            return Err(match self.kind {
                AccountKind::Savings => {
                    DomainError::insufficient_savings(amount.value(), available)
                }
                AccountKind::Current { .. } => {
                    DomainError::overdraft_exceeded(amount.value(), available)
                }
            });
        }

        let balance = self.apply(Transaction::withdrawal(&amount))?;

        tracing::info!(
            account = %self.number,
            amount = %amount,
            balance = %balance,
            "Withdrawal recorded"
        );
        Ok(balance)
    }

    fn calculate_interest(&mut self) -> Result<InterestOutcome, DomainError> {
        let Some(rate) = self.kind.interest_rate() else {
            tracing::info!(account = %self.number, "No interest for current account");
            return Ok(InterestOutcome::NotApplicable);
        };

        // Unrounded: the full balance * rate / 100 is credited
        let raw = self
            .balance
            .value()
            .checked_mul(rate)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| DomainError::BalanceOverflow(self.number.clone()))?;

        let interest = match Amount::new(raw) {
            Ok(interest) => interest,
            Err(_) => return Ok(InterestOutcome::NothingAccrued),
        };

        let balance = self.apply(Transaction::deposit(&interest))?;
        tracing::info!(
            account = %self.number,
            interest = %interest,
            balance = %balance,
            "Interest posted"
        );

        Ok(InterestOutcome::Credited { interest, balance })
    }
}
