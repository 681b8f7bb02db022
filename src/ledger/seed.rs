use super::bank::Ledger;
use super::error::LedgerError;
use super::Decimal;

impl Ledger {
    /// Demo ledger with three clients and four accounts.
    ///
    /// Built through the regular operations so balances and histories agree:
    ///
    /// | owner   | balance | history                                      |
    /// |---------|---------|----------------------------------------------|
    /// | Lilian  | 3700    | deposit 1200, deposit 3000, withdrawal 500   |
    /// | Lilian  | 4100    | deposit 4000, transfer 100 (in)              |
    /// | Zoro    | 900     | deposit 800, deposit 200, transfer 100 (out) |
    /// | Suzanne | 2200    | deposit 2500, withdrawal 300                 |
    pub fn with_sample_data() -> Result<Self, LedgerError> {
        let mut ledger = Ledger::new();

        let lilian = ledger.create_client("Lilian", "Sinsau")?;
        let zoro = ledger.create_client("Zoro", "Shinso")?;
        let suzanne = ledger.create_client("Suzanne", "Bien-Aimé")?;

        let checking = ledger.create_account(lilian, Decimal::from(1200))?;
        ledger.deposit(checking, Decimal::from(3000))?;
        ledger.withdraw(checking, Decimal::from(500))?;

        let savings = ledger.create_account(lilian, Decimal::from(4000))?;

        let zoro_account = ledger.create_account(zoro, Decimal::from(800))?;
        ledger.deposit(zoro_account, Decimal::from(200))?;
        ledger.transfer(zoro_account, savings, Decimal::from(100))?;

        let suzanne_account = ledger.create_account(suzanne, Decimal::from(2500))?;
        ledger.withdraw(suzanne_account, Decimal::from(300))?;

        log::debug!(
            "Sample ledger ready: {} clients, {} accounts",
            ledger.list_clients().len(),
            ledger.list_accounts().len()
        );
        Ok(ledger)
    }
}
