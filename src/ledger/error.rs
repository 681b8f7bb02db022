use crate::ledger::{AccountId, ClientId, Decimal};

/// Top-level error type for the ledger's export surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Broad category of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    InsufficientFunds,
    SameAccount,
    Invariant,
}

/// Errors raised by ledger operations.
/// Every check runs before any mutation, so a returned error means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid {field}: must be a non-empty string")]
    InvalidName { field: &'static str },

    #[error("Invalid amount {amount}: must be a positive number")]
    InvalidAmount { amount: Decimal },

    #[error("Amount {amount} would overflow the ledger's balance capacity")]
    AmountOverflow { amount: Decimal },

    #[error("Client with ID {client} not found")]
    ClientNotFound { client: ClientId },

    #[error("Account with ID {account} not found")]
    AccountNotFound { account: AccountId },

    #[error("Insufficient funds: account {account} has {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("Cannot transfer from account {account} to itself")]
    SameAccount { account: AccountId },

    #[error("Cannot delete account {account}: balance is {balance}, not zero")]
    NonZeroBalance { account: AccountId, balance: Decimal },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidName { .. }
            | LedgerError::InvalidAmount { .. }
            | LedgerError::AmountOverflow { .. } => ErrorKind::Validation,
            LedgerError::ClientNotFound { .. } | LedgerError::AccountNotFound { .. } => {
                ErrorKind::NotFound
            }
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            LedgerError::SameAccount { .. } => ErrorKind::SameAccount,
            LedgerError::NonZeroBalance { .. } => ErrorKind::Invariant,
        }
    }
}
