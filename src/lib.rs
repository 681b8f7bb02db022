//! A toy in-memory banking ledger.
//!
//! Clients own accounts, accounts keep an append-only history, and the
//! [`Ledger`] moves funds between them. Nothing is persisted.

pub mod ledger;

pub use ledger::{
    Account, AccountId, Client, ClientId, ClientSummary, Decimal, Direction, Error, ErrorKind,
    Ledger, LedgerError, Transaction, TransactionKind,
};
