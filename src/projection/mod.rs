//! Projection module
//!
//! Read-side views of customers and accounts.

mod statement;

pub use statement::{render_accounts, Statement};
