//! banking_system Library
//!
//! In-memory banking domain model: customers, savings and current accounts,
//! and per-account transaction logs.

pub mod aggregate;
pub mod config;
pub mod demo;
pub mod domain;
pub mod handlers;
pub mod projection;

mod error;

pub use aggregate::{Account, AccountKind, Customer, InterestOutcome, Transactional};
pub use config::{Config, ConfigError};
pub use domain::{Amount, AmountError, Balance, DomainError, Transaction, TransactionKind};
pub use error::{AppError, AppResult};
