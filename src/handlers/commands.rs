//! Command definitions
//!
//! Commands represent intentions to change an account's state.

use serde::{Deserialize, Serialize};

use crate::aggregate::InterestOutcome;
use crate::domain::{Balance, DomainError};

/// A single ledger operation against one of the customer's accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Deposit {
        account_number: String,
        /// Amount as string for precise decimal
        amount: String,
    },
    Withdraw {
        account_number: String,
        amount: String,
    },
    CalculateInterest {
        account_number: String,
    },
}

impl Command {
    pub fn deposit(account_number: impl Into<String>, amount: impl ToString) -> Self {
        Self::Deposit {
            account_number: account_number.into(),
            amount: amount.to_string(),
        }
    }

    pub fn withdraw(account_number: impl Into<String>, amount: impl ToString) -> Self {
        Self::Withdraw {
            account_number: account_number.into(),
            amount: amount.to_string(),
        }
    }

    pub fn calculate_interest(account_number: impl Into<String>) -> Self {
        Self::CalculateInterest {
            account_number: account_number.into(),
        }
    }

    pub fn account_number(&self) -> &str {
        match self {
            Command::Deposit { account_number, .. }
            | Command::Withdraw { account_number, .. }
            | Command::CalculateInterest { account_number } => account_number,
        }
    }

    /// Get the operation name (for logging)
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::CalculateInterest { .. } => "calculate_interest",
        }
    }
}

/// What a successful command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Deposit or withdrawal applied
    BalanceChanged {
        account_number: String,
        balance: Balance,
    },

    /// Interest calculation ran
    Interest {
        account_number: String,
        outcome: InterestOutcome,
    },
}

/// Result of running a batch of commands.
///
/// Execution stops at the first failure; `outcomes` holds what was applied
/// before it.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub outcomes: Vec<CommandOutcome>,
    pub failure: Option<DomainError>,
}

impl BatchResult {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}
