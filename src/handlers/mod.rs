//! Command Handlers module
//!
//! Handlers that run ledger commands against a customer's accounts.

mod batch_handler;
mod commands;


pub use batch_handler::BatchHandler;
pub use commands::*;
