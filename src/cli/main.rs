mod commands;

use anyhow::{Context, Result};
use bank_ledger::{Decimal, Ledger};
use commands::{Args, Command, Parser, Table};

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Seed the sample ledger
    let mut ledger = Ledger::with_sample_data().context("Failed to seed the sample ledger")?;
    log::info!(
        "Sample ledger loaded: {} clients, {} accounts",
        ledger.list_clients().len(),
        ledger.list_accounts().len()
    );

    // 2. Run the requested command
    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            run_demo(&mut ledger)?;
            print_report(&ledger, true)?;
        }
        Command::Report { history } => print_report(&ledger, history)?,
        Command::Export { table } => {
            let stdout = std::io::stdout();
            match table {
                Table::Accounts => ledger
                    .export_accounts(stdout)
                    .context("Failed to export accounts to stdout")?,
                Table::History => ledger
                    .export_history(stdout)
                    .context("Failed to export history to stdout")?,
            }
        }
    }

    Ok(())
}

/// Withdraw then deposit on the first account, then move funds from the second to the fourth.
fn run_demo(ledger: &mut Ledger) -> Result<()> {
    let ids: Vec<_> = ledger.list_accounts().iter().map(|a| a.id()).collect();
    let [first, second, _, fourth] = ids[..] else {
        anyhow::bail!("Sample ledger should hold four accounts, found {}", ids.len());
    };

    ledger.withdraw(first, Decimal::from(500))?;
    ledger.deposit(first, Decimal::from(300))?;
    ledger.transfer(second, fourth, Decimal::from(200))?;

    // Rejected operations leave the ledger untouched
    if let Err(e) = ledger.withdraw(fourth, Decimal::from(1_000_000)) {
        log::warn!("Rejected: {e}");
    }
    if let Err(e) = ledger.transfer(first, first, Decimal::from(10)) {
        log::warn!("Rejected: {e}");
    }
    if let Err(e) = ledger.delete_account(second) {
        log::warn!("Rejected: {e}");
    }
    Ok(())
}

fn print_report(ledger: &Ledger, with_history: bool) -> Result<()> {
    for summary in ledger.client_summaries() {
        println!("Client n°{} ({})", summary.client.id(), summary.client);
        for account in &summary.accounts {
            println!(
                "  Balance of account n°{}: {}",
                account.id(),
                ledger.account_balance(account.id())?
            );
            if with_history {
                for transaction in ledger.transaction_history(account.id())? {
                    println!("    - {transaction}");
                }
            }
        }
        println!(
            "  Client n°{} total balance: {}",
            summary.client.id(),
            ledger.client_total_balance(summary.client.id())?
        );
    }
    println!("Bank owns {}", ledger.bank_total_balance());
    Ok(())
}
