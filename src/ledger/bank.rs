use chrono::{DateTime, Utc};

use super::account::{Account, AccountId};
use super::client::{Client, ClientId};
use super::error::LedgerError;
use super::transaction::{validate_amount, Direction, Transaction, TransactionKind};
use super::Decimal;

/// The in-memory bank: every client, every account, and the operations over them.
///
/// All state is owned by this value; independent ledgers never share anything.
#[derive(Debug, Default)]
pub struct Ledger {
    /// Clients in registration order
    clients: Vec<Client>,
    /// Accounts in creation order
    accounts: Vec<Account>,
    /// Last timestamp handed out, keeps history non-decreasing
    clock: Option<DateTime<Utc>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        log::trace!("Ledger initialized");
        Self::default()
    }

    /// Capture the current time, never earlier than the previous capture.
    fn now(&mut self) -> DateTime<Utc> {
        let now = match self.clock {
            Some(last) => Utc::now().max(last),
            None => Utc::now(),
        };
        self.clock = Some(now);
        now
    }
}

// =============================================================================
// Client Registry
// =============================================================================

impl Ledger {
    /// All clients, in registration order
    pub fn list_clients(&self) -> &[Client] {
        &self.clients
    }

    /// Silent lookup: `None` when no client has this ID
    pub fn find_client(&self, client_id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == client_id)
    }

    /// Register a new client and return its fresh ID
    pub fn create_client(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<ClientId, LedgerError> {
        let client = Client::new(first_name.into(), last_name.into())?;
        let client_id = client.id();
        log::debug!("[client] Registered {client} as {client_id}");
        self.clients.push(client);
        Ok(client_id)
    }

    fn require_client(&self, client_id: ClientId) -> Result<&Client, LedgerError> {
        self.find_client(client_id)
            .ok_or(LedgerError::ClientNotFound { client: client_id })
    }
}

// =============================================================================
// Account Registry
// =============================================================================

impl Ledger {
    /// All accounts, in creation order
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Silent lookup: `None` when no account has this ID
    pub fn find_account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id() == account_id)
    }

    /// Loud lookup used by every public operation
    pub fn get_account(&self, account_id: AccountId) -> Result<&Account, LedgerError> {
        self.find_account(account_id)
            .ok_or(LedgerError::AccountNotFound {
                account: account_id,
            })
    }

    /// Accounts owned by `client_id`, in registry order
    pub fn list_accounts_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<&Account>, LedgerError> {
        self.require_client(client_id)?;
        Ok(self
            .accounts
            .iter()
            .filter(|account| account.client_id() == client_id)
            .collect())
    }

    /// Open an account for an existing client, seeded with a deposit of `initial_balance`
    pub fn create_account(
        &mut self,
        client_id: ClientId,
        initial_balance: Decimal,
    ) -> Result<AccountId, LedgerError> {
        self.require_client(client_id)?;
        let initial_balance = validate_amount(initial_balance)?;
        self.ensure_bank_capacity(initial_balance)?;

        let account = Account::new(client_id, initial_balance);
        let account_id = account.id();
        self.accounts.push(account);
        self.record_transaction(account_id, TransactionKind::Deposit, initial_balance)?;

        log::info!(
            "Account n°{account_id} opened for client n°{client_id} with {initial_balance}"
        );
        Ok(account_id)
    }

    /// Remove an empty account for good
    pub fn delete_account(&mut self, account_id: AccountId) -> Result<(), LedgerError> {
        let balance = self.get_account(account_id)?.balance();
        if !balance.is_zero() {
            return Err(LedgerError::NonZeroBalance {
                account: account_id,
                balance,
            });
        }

        let index = self.index_of(account_id)?;
        self.accounts.remove(index);

        log::info!("Account n°{account_id} deleted.");
        Ok(())
    }

    fn index_of(&self, account_id: AccountId) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.id() == account_id)
            .ok_or(LedgerError::AccountNotFound {
                account: account_id,
            })
    }

    fn get_account_mut(&mut self, account_id: AccountId) -> Result<&mut Account, LedgerError> {
        let index = self.index_of(account_id)?;
        Ok(&mut self.accounts[index])
    }

    /// Fails if adding `amount` to the bank total would overflow.
    /// Balances are non-negative, so this also bounds every single balance.
    fn ensure_bank_capacity(&self, amount: Decimal) -> Result<(), LedgerError> {
        self.accounts
            .iter()
            .try_fold(amount, |total, account| total.checked_add(account.balance()))
            .map(|_| ())
            .ok_or(LedgerError::AmountOverflow { amount })
    }
}

// =============================================================================
// Transaction Recorder
// =============================================================================

impl Ledger {
    /// Append a history entry to an account, stamped with the current time.
    ///
    /// The balance is left alone: callers that record must also move funds,
    /// otherwise [`Account::replayed_balance`] drifts from the stored balance.
    pub fn record_transaction(
        &mut self,
        account_id: AccountId,
        kind: TransactionKind,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let index = self.index_of(account_id)?;
        let amount = validate_amount(amount)?;
        let timestamp = self.now();

        log::trace!("[record] account={account_id} kind={kind} amount={amount}");
        self.accounts[index].append(Transaction::new(kind, amount, timestamp));
        Ok(())
    }
}

// =============================================================================
// Ledger Operations
// =============================================================================

impl Ledger {
    /// Credit `amount` to an account
    pub fn deposit(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        log::trace!("[deposit] account={account_id} amount={amount}");
        let amount = validate_amount(amount)?;

        let balance = self.get_account(account_id)?.balance();
        if balance.checked_add(amount).is_none() {
            return Err(LedgerError::AmountOverflow { amount });
        }
        self.ensure_bank_capacity(amount)?;

        let account = self.get_account_mut(account_id)?;
        account.credit(amount);
        let balance = account.balance();
        self.record_transaction(account_id, TransactionKind::Deposit, amount)?;

        log::info!("Deposit of {amount} on account n°{account_id}. New balance: {balance}");
        Ok(())
    }

    /// Debit `amount` from an account that holds at least that much
    pub fn withdraw(&mut self, account_id: AccountId, amount: Decimal) -> Result<(), LedgerError> {
        log::trace!("[withdrawal] account={account_id} amount={amount}");
        let amount = validate_amount(amount)?;

        let account = self.get_account_mut(account_id)?;
        if account.balance() < amount {
            return Err(LedgerError::InsufficientFunds {
                account: account_id,
                balance: account.balance(),
                requested: amount,
            });
        }

        account.debit(amount);
        let balance = account.balance();
        self.record_transaction(account_id, TransactionKind::Withdrawal, amount)?;

        log::info!("Withdraw of {amount} on account n°{account_id}. New balance: {balance}");
        Ok(())
    }

    /// Move `amount` between two distinct accounts, recording one leg on each
    pub fn transfer(
        &mut self,
        from_account_id: AccountId,
        to_account_id: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        log::trace!("[transfer] from={from_account_id} to={to_account_id} amount={amount}");
        let amount = validate_amount(amount)?;
        if from_account_id == to_account_id {
            return Err(LedgerError::SameAccount {
                account: from_account_id,
            });
        }

        let from = self.index_of(from_account_id)?;
        let to = self.index_of(to_account_id)?;

        let available = self.accounts[from].balance();
        if available < amount {
            return Err(LedgerError::InsufficientFunds {
                account: from_account_id,
                balance: available,
                requested: amount,
            });
        }
        if self.accounts[to].balance().checked_add(amount).is_none() {
            return Err(LedgerError::AmountOverflow { amount });
        }

        self.accounts[from].debit(amount);
        self.accounts[to].credit(amount);
        self.record_transaction(
            from_account_id,
            TransactionKind::Transfer(Direction::Outgoing),
            amount,
        )?;
        self.record_transaction(
            to_account_id,
            TransactionKind::Transfer(Direction::Incoming),
            amount,
        )?;

        log::info!(
            "Transfer of {} from account n°{} ({}) to account n°{} ({})",
            amount,
            from_account_id,
            self.accounts[from].balance(),
            to_account_id,
            self.accounts[to].balance()
        );
        Ok(())
    }
}
