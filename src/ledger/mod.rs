//! Banking ledger module.
//!
//! This module contains the in-memory bank including:
//! - `Ledger` - Client and account registries plus deposit, withdraw and transfer
//! - `Client` / `Account` - Registry entries
//! - `Transaction` types - Immutable history entries
//! - `Error` types - Ledger and export errors

mod account;
mod bank;
mod client;
mod error;
mod reporting;
mod seed;
mod transaction;

pub use rust_decimal::Decimal;

pub use account::{Account, AccountId};
pub use bank::Ledger;
pub use client::{Client, ClientId};
pub use error::{Error, ErrorKind, LedgerError};
pub use reporting::ClientSummary;
pub use transaction::{Direction, Transaction, TransactionKind};
