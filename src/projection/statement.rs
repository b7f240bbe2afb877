//! Statement projection
//!
//! Read views over accounts and customers, rendered as console text or JSON.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{Account, Customer};
use crate::domain::Transaction;

/// Read view of one account's history
#[derive(Debug, Clone, Serialize)]
pub struct Statement<'a> {
    pub account_number: &'a str,
    pub kind: &'static str,
    pub balance: Decimal,
    pub overdraft_limit: Decimal,
    pub transactions: &'a [Transaction],
}

impl<'a> Statement<'a> {
    pub fn for_account(account: &'a Account) -> Self {
        Self {
            account_number: account.number(),
            kind: account.kind().name(),
            balance: account.balance().value(),
            overdraft_limit: account.kind().overdraft_limit(),
            transactions: account.transactions(),
        }
    }

    /// Header followed by one line per transaction
    pub fn render(&self, currency: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.transactions.len() + 1);
        lines.push(format!("Transaction History for {}", self.account_number));
        lines.extend(self.transactions.iter().map(|t| t.render(currency)));
        lines
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Header followed by each account's summary line
pub fn render_accounts(customer: &Customer, currency: &str) -> Vec<String> {
    let mut lines = vec![format!("Accounts for {}", customer.name())];
    lines.extend(customer.display_accounts(currency));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Transactional;

    fn funded_current() -> (Customer, Account) {
        let customer = Customer::new("Rahul Sharma", "ABCDE1234F");
        let mut account = Account::current("CA001", &customer, Decimal::new(25000, 0)).unwrap();
        account.deposit(Decimal::new(100000, 0)).unwrap();
        account.withdraw(Decimal::new(120000, 0)).unwrap();
        (customer, account)
    }

    #[test]
    fn test_statement_render() {
        let (_, account) = funded_current();

        let lines = Statement::for_account(&account).render("₹");

        assert_eq!(
            lines,
            vec![
                "Transaction History for CA001",
                "DEPOSIT: ₹100000.00",
                "WITHDRAWAL: ₹120000.00",
            ]
        );
    }

    #[test]
    fn test_statement_json() {
        let (_, account) = funded_current();

        let json = Statement::for_account(&account).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["account_number"], "CA001");
        assert_eq!(value["kind"], "current");
        assert_eq!(value["balance"], "-20000");
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
        assert_eq!(value["transactions"][1]["kind"], "WITHDRAWAL");
        assert_eq!(value["transactions"][1]["amount"], "-120000");
        assert!(value["transactions"][0]["id"].is_string());
        assert!(value["transactions"][0]["recorded_at"].is_string());
    }

    #[test]
    fn test_render_accounts() {
        let mut customer = Customer::new("Rahul Sharma", "ABCDE1234F");
        let savings = Account::savings("SA001", &customer);
        customer.add_account(savings).unwrap();

        assert_eq!(
            render_accounts(&customer, "₹"),
            vec!["Accounts for Rahul Sharma", "SA001 - Balance: ₹0.00"]
        );
    }
}
