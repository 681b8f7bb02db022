use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::account::{Account, AccountId, AccountRow};
use super::bank::Ledger;
use super::client::{Client, ClientId};
use super::error::{Error, LedgerError};
use super::transaction::{Direction, Transaction};
use super::Decimal;

/// A client together with the accounts it owns.
#[derive(Debug)]
pub struct ClientSummary<'a> {
    pub client: &'a Client,
    pub accounts: Vec<&'a Account>,
    pub total: Decimal,
}

/// Flat CSV view of one history entry.
#[derive(Debug, Serialize)]
struct HistoryRow {
    account: AccountId,
    kind: &'static str,
    direction: Option<Direction>,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl HistoryRow {
    fn new(account: AccountId, transaction: &Transaction) -> Self {
        Self {
            account,
            kind: transaction.kind().name(),
            direction: transaction.kind().direction(),
            amount: transaction.amount(),
            timestamp: transaction.timestamp(),
        }
    }
}

impl Ledger {
    /// Current balance of an account
    pub fn account_balance(&self, account_id: AccountId) -> Result<Decimal, LedgerError> {
        let balance = self.get_account(account_id)?.balance();
        log::debug!("Balance of account n°{account_id}: {balance}");
        Ok(balance)
    }

    /// Sum of the balances of every account owned by a client
    pub fn client_total_balance(&self, client_id: ClientId) -> Result<Decimal, LedgerError> {
        let total = sum_balances(self.list_accounts_for_client(client_id)?);
        log::debug!("Client n°{client_id} total balance: {total}");
        Ok(total)
    }

    /// Sum of every balance in the bank
    pub fn bank_total_balance(&self) -> Decimal {
        let total = sum_balances(self.list_accounts());
        log::debug!("Bank owns {total}");
        total
    }

    /// History of an account, oldest first
    pub fn transaction_history(
        &self,
        account_id: AccountId,
    ) -> Result<&[Transaction], LedgerError> {
        Ok(self.get_account(account_id)?.history())
    }

    /// One summary per client, in registration order
    pub fn client_summaries(&self) -> Vec<ClientSummary<'_>> {
        self.list_clients()
            .iter()
            .map(|client| {
                let accounts: Vec<&Account> = self
                    .list_accounts()
                    .iter()
                    .filter(|account| account.client_id() == client.id())
                    .collect();
                ClientSummary {
                    client,
                    total: sum_balances(accounts.iter().copied()),
                    accounts,
                }
            })
            .collect()
    }

    /// Write every account as CSV to any sink (Stdout, File, ...).
    /// The CSV writer is buffered already; do not wrap `writer` in an `io::BufWriter`.
    pub fn export_accounts<W: Write>(&self, writer: W) -> Result<(), Error> {
        log::info!("Exporting {} accounts", self.list_accounts().len());

        let mut csv_writer = csv::Writer::from_writer(writer);
        for account in self.list_accounts() {
            csv_writer.serialize(AccountRow::from(account))?;
        }
        csv_writer.flush()?;

        log::trace!("Account export complete");
        Ok(())
    }

    /// Write the full history of every account as CSV, account by account
    pub fn export_history<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let mut rows = 0usize;
        for account in self.list_accounts() {
            for transaction in account.history() {
                csv_writer.serialize(HistoryRow::new(account.id(), transaction))?;
                rows += 1;
            }
        }
        csv_writer.flush()?;

        log::info!("Exported {rows} transactions");
        Ok(())
    }
}

// Credits are refused once the bank total would overflow, so this sum always fits.
fn sum_balances<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Decimal {
    accounts.into_iter().map(Account::balance).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_totals_on_empty_ledger() {
        let mut ledger = Ledger::new();
        let client = ledger.create_client("Zoro", "Shinso").unwrap();

        assert_eq!(ledger.bank_total_balance(), Decimal::ZERO);
        assert_eq!(ledger.client_total_balance(client), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_client_total_sums_own_accounts_only() {
        let mut ledger = Ledger::new();
        let lilian = ledger.create_client("Lilian", "Sinsau").unwrap();
        let zoro = ledger.create_client("Zoro", "Shinso").unwrap();
        ledger.create_account(lilian, dec!(3700)).unwrap();
        ledger.create_account(lilian, dec!(4100)).unwrap();
        ledger.create_account(zoro, dec!(900)).unwrap();

        assert_eq!(ledger.client_total_balance(lilian), Ok(dec!(7800)));
        assert_eq!(ledger.client_total_balance(zoro), Ok(dec!(900)));
        assert_eq!(ledger.bank_total_balance(), dec!(8700));
    }

    #[test]
    fn test_reporting_unknown_ids() {
        let ledger = Ledger::new();
        let missing = Uuid::new_v4();
        assert_eq!(
            ledger.account_balance(missing),
            Err(LedgerError::AccountNotFound { account: missing })
        );
        assert_eq!(
            ledger.client_total_balance(missing),
            Err(LedgerError::ClientNotFound { client: missing })
        );
        assert!(ledger.transaction_history(missing).is_err());
    }

    #[test]
    fn test_bank_total_at_capacity() {
        let mut ledger = Ledger::new();
        let client = ledger.create_client("Zoro", "Shinso").unwrap();
        ledger.create_account(client, Decimal::MAX).unwrap();

        assert!(ledger.create_account(client, Decimal::MAX).is_err());
        assert_eq!(ledger.bank_total_balance(), Decimal::MAX);
        assert_eq!(ledger.client_total_balance(client), Ok(Decimal::MAX));
    }

    #[test]
    fn test_client_summaries_follow_registration_order() {
        let mut ledger = Ledger::new();
        let first = ledger.create_client("Lilian", "Sinsau").unwrap();
        let second = ledger.create_client("Suzanne", "Bien-Aimé").unwrap();
        ledger.create_account(second, dec!(2200)).unwrap();

        let summaries = ledger.client_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].client.id(), first);
        assert!(summaries[0].accounts.is_empty());
        assert_eq!(summaries[0].total, Decimal::ZERO);
        assert_eq!(summaries[1].client.id(), second);
        assert_eq!(summaries[1].total, dec!(2200));
    }

    #[test]
    fn test_export_accounts_writes_header_and_rows() {
        let mut ledger = Ledger::new();
        let client = ledger.create_client("Zoro", "Shinso").unwrap();
        let account = ledger.create_account(client, dec!(900)).unwrap();

        let mut output = Vec::new();
        ledger.export_accounts(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("account,client,balance,transactions"));
        assert_eq!(lines.next(), Some(format!("{account},{client},900,1").as_str()));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_history_marks_transfer_direction() {
        let mut ledger = Ledger::new();
        let client = ledger.create_client("Zoro", "Shinso").unwrap();
        let from = ledger.create_account(client, dec!(100)).unwrap();
        let to = ledger.create_account(client, dec!(100)).unwrap();
        ledger.transfer(from, to, dec!(40)).unwrap();

        let mut output = Vec::new();
        ledger.export_history(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "account,kind,direction,amount,timestamp");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with(&format!("{from},deposit,,100,")));
        assert!(lines[2].starts_with(&format!("{from},transfer,outgoing,40,")));
        assert!(lines[3].starts_with(&format!("{to},deposit,,100,")));
        assert!(lines[4].starts_with(&format!("{to},transfer,incoming,40,")));
    }
}
