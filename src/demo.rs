//! Demo driver
//!
//! Opens one customer with a savings and a current account, runs the fixed
//! command sequence, and produces the console report.

use crate::aggregate::{Account, Customer};
use crate::config::Config;
use crate::error::AppResult;
use crate::handlers::{BatchHandler, BatchResult, Command, CommandOutcome};
use crate::projection::{render_accounts, Statement};

pub const SAVINGS_NUMBER: &str = "SA001";
pub const CURRENT_NUMBER: &str = "CA001";

/// The fixed operation sequence
pub fn commands() -> Vec<Command> {
    vec![
        Command::deposit(SAVINGS_NUMBER, 50000),
        Command::withdraw(SAVINGS_NUMBER, 10000),
        Command::calculate_interest(SAVINGS_NUMBER),
        Command::deposit(CURRENT_NUMBER, 100000),
        Command::withdraw(CURRENT_NUMBER, 120000),
        Command::withdraw(CURRENT_NUMBER, 10000),
    ]
}

/// Final state of a demo run
#[derive(Debug)]
pub struct DemoRun {
    pub customer: Customer,
    pub result: BatchResult,
}

/// Build the customer and run the command sequence
pub fn run(config: &Config) -> AppResult<DemoRun> {
    let mut customer = Customer::new("Rahul Sharma", "ABCDE1234F");
    tracing::info!(
        customer = customer.name(),
        tax_id = customer.tax_id(),
        "Customer created"
    );

    let savings = Account::savings(SAVINGS_NUMBER, &customer);
    let current = Account::current(CURRENT_NUMBER, &customer, config.demo_overdraft_limit)?;
    customer.add_account(savings)?;
    customer.add_account(current)?;

    let commands = commands();
    let result = BatchHandler::new(&mut customer).execute(&commands);

    tracing::info!(
        applied = result.outcomes.len(),
        total = commands.len(),
        complete = result.is_complete(),
        "Demo sequence finished"
    );

    Ok(DemoRun { customer, result })
}

impl DemoRun {
    /// Console report lines, in print order
    pub fn report(&self, currency: &str) -> Vec<String> {
        let mut lines: Vec<String> = self
            .result
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                CommandOutcome::Interest { outcome, .. } => Some(outcome.message(currency)),
                CommandOutcome::BalanceChanged { .. } => None,
            })
            .collect();

        if let Some(err) = &self.result.failure {
            lines.push(format!("Error: {}", err));
        }

        lines.push(String::new());
        lines.extend(render_accounts(&self.customer, currency));

        for account in self.customer.accounts() {
            lines.push(String::new());
            lines.extend(Statement::for_account(account).render(currency));
        }

        lines
    }
}
