//! Transaction records
//!
//! A transaction is an immutable fact appended to an account's log.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use super::amount::format_money;
use super::Amount;

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Get the kind as the label used in history lines
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in an account's transaction log.
///
/// `amount` is signed: positive for deposits, negated for withdrawals.
/// Fields are private and there are no setters; `id` and `recorded_at`
/// surface through the JSON statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: Uuid,
    kind: TransactionKind,
    amount: Decimal,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a deposit of `amount`
    pub fn deposit(amount: &Amount) -> Self {
        Self::record(TransactionKind::Deposit, amount.value())
    }

    /// Record a withdrawal of `amount` (stored negated)
    pub fn withdrawal(amount: &Amount) -> Self {
        Self::record(TransactionKind::Withdrawal, -amount.value())
    }

    fn record(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            recorded_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Signed amount as stored in the log
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Render as `"<KIND>: <currency><magnitude>"`
    pub fn render(&self, currency: &str) -> String {
        format!("{}: {}{}", self.kind, currency, format_money(self.amount.abs()))
    }
}
