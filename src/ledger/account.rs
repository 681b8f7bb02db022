use serde::Serialize;
use uuid::Uuid;

use super::client::ClientId;
use super::transaction::Transaction;
use super::Decimal;

pub type AccountId = Uuid;

/// A balance owned by one client, with its append-only history.
///
/// The balance is stored alongside the history; the ledger keeps the two
/// consistent, see [`Account::replayed_balance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    client_id: ClientId,
    balance: Decimal,
    history: Vec<Transaction>,
}

impl Account {
    pub(super) fn new(client_id: ClientId, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            balance,
            history: Vec::new(),
        }
    }

    /// Returns the account ID
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the owning client's ID
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the history in chronological order
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Recompute the balance from the recorded history.
    /// Equals [`Account::balance`] whenever the ledger's operations kept both in step.
    pub fn replayed_balance(&self) -> Decimal {
        self.history
            .iter()
            .map(Transaction::signed_amount)
            .sum::<Decimal>()
            .normalize()
    }

    /// Credit the account. Does not touch history.
    pub(super) fn credit(&mut self, amount: Decimal) {
        self.balance = (self.balance + amount).normalize();
    }

    /// Debit the account. Caller must ensure sufficient funds.
    pub(super) fn debit(&mut self, amount: Decimal) {
        debug_assert!(amount <= self.balance, "debit exceeds balance");
        self.balance = (self.balance - amount).normalize();
    }

    pub(super) fn append(&mut self, transaction: Transaction) {
        self.history.push(transaction);
    }
}

/// Flat CSV view of an account.
#[derive(Debug, Serialize)]
pub(super) struct AccountRow {
    account: AccountId,
    client: ClientId,
    balance: Decimal,
    transactions: usize,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            account: account.id,
            client: account.client_id,
            balance: account.balance,
            transactions: account.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::{Direction, TransactionKind};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn account_with(balance: Decimal) -> Account {
        Account::new(Uuid::new_v4(), balance)
    }

    #[test]
    fn test_new_account_has_empty_history() {
        let account = account_with(dec!(100));
        assert_eq!(account.balance(), dec!(100));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_credit_and_debit() {
        let mut account = account_with(dec!(100));
        account.credit(dec!(50.5));
        assert_eq!(account.balance(), dec!(150.5));
        account.debit(dec!(150.5));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_replayed_balance_matches_history() {
        let now = Utc::now();
        let mut account = account_with(dec!(900));
        for (kind, amount) in [
            (TransactionKind::Deposit, dec!(800)),
            (TransactionKind::Deposit, dec!(200)),
            (TransactionKind::Transfer(Direction::Outgoing), dec!(100)),
        ] {
            account.append(Transaction::new(kind, amount, now));
        }
        assert_eq!(account.replayed_balance(), account.balance());
    }

    #[test]
    fn test_normalize_trims_trailing_zeros() {
        let mut account = account_with(dec!(1));
        account.credit(dec!(99.0000));
        assert_eq!(account.balance().to_string(), "100");
    }
}
