//! Batch Handler
//!
//! Runs a fixed sequence of commands against a customer's accounts,
//! abandoning the rest of the sequence at the first domain error.

use crate::aggregate::{Customer, Transactional};
use crate::domain::{Amount, DomainError};

use super::{BatchResult, Command, CommandOutcome};

/// Handler for command sequences
pub struct BatchHandler<'a> {
    customer: &'a mut Customer,
}

impl<'a> BatchHandler<'a> {
    pub fn new(customer: &'a mut Customer) -> Self {
        Self { customer }
    }

    /// Execute commands in order until one fails
    pub fn execute<'c, I>(&mut self, commands: I) -> BatchResult
    where
        I: IntoIterator<Item = &'c Command>,
    {
        let mut outcomes = Vec::new();

        for command in commands {
            match self.execute_one(command) {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::warn!(
                        op = command.op_name(),
                        account = command.account_number(),
                        applied = outcomes.len(),
                        error = %e,
                        "Command failed, abandoning remaining commands"
                    );
                    return BatchResult {
                        outcomes,
                        failure: Some(e),
                    };
                }
            }
        }

        BatchResult {
            outcomes,
            failure: None,
        }
    }

    /// Execute a single command
    pub fn execute_one(&mut self, command: &Command) -> Result<CommandOutcome, DomainError> {
        let account = self.customer.account_mut(command.account_number())?;
        let account_number = account.number().to_string();

        match command {
            Command::Deposit { amount, .. } => {
                let amount: Amount = amount.parse()?;
                let balance = account.deposit(amount.value())?;
                Ok(CommandOutcome::BalanceChanged {
                    account_number,
                    balance,
                })
            }
            Command::Withdraw { amount, .. } => {
                let amount: Amount = amount.parse()?;
                let balance = account.withdraw(amount.value())?;
                Ok(CommandOutcome::BalanceChanged {
                    account_number,
                    balance,
                })
            }
            Command::CalculateInterest { .. } => {
                let outcome = account.calculate_interest()?;
                Ok(CommandOutcome::Interest {
                    account_number,
                    outcome,
                })
            }
        }
    }
}
