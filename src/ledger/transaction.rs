use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::LedgerError;
use super::Decimal;

/// Which side of a transfer a leg records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// Balance-affecting event kinds.
///
/// A transfer leg remembers its direction so history can be replayed,
/// but it is still displayed simply as `transfer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer(Direction),
}

impl TransactionKind {
    pub fn name(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer(_) => "transfer",
        }
    }

    /// Returns the transfer direction, if this is a transfer leg
    pub fn direction(self) -> Option<Direction> {
        match self {
            TransactionKind::Transfer(direction) => Some(direction),
            _ => None,
        }
    }

    /// Whether this kind adds funds to the account it is recorded on
    pub fn is_credit(self) -> bool {
        matches!(
            self,
            TransactionKind::Deposit | TransactionKind::Transfer(Direction::Incoming)
        )
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable entry in an account's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(super) fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        debug_assert!(amount > Decimal::ZERO, "transaction amount must be positive");
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Signed effect of this entry on its account's balance
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} of {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount
        )
    }
}

/// Accepts only strictly positive amounts.
pub(crate) fn validate_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount { amount })
    }
}
