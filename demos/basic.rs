//! Basic example of using the `Ledger`.
//!
//! Run with: `cargo run --example basic`

use bank_ledger::{Decimal, Ledger};

fn main() {
    // Initialize logger (optional, but shows the operation notices)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut ledger = Ledger::new();
    let ada = ledger
        .create_client("Ada", "Lovelace")
        .expect("Failed to create client");
    let checking = ledger
        .create_account(ada, Decimal::from(1000))
        .expect("Failed to open checking account");
    let savings = ledger
        .create_account(ada, Decimal::from(250))
        .expect("Failed to open savings account");

    ledger
        .withdraw(checking, Decimal::from(120))
        .expect("Failed to withdraw");
    ledger
        .transfer(checking, savings, Decimal::from(380))
        .expect("Failed to transfer");

    if let Err(e) = ledger.delete_account(checking) {
        println!("Cannot close checking yet: {e}");
    }
    ledger
        .transfer(checking, savings, Decimal::from(500))
        .expect("Failed to empty checking");
    ledger
        .delete_account(checking)
        .expect("Failed to delete empty account");

    println!("\n=== History of savings ===");
    for transaction in ledger
        .transaction_history(savings)
        .expect("Savings account should exist")
    {
        println!("- {transaction}");
    }

    println!("\n=== Final State ===");
    ledger
        .export_accounts(std::io::stdout())
        .expect("Failed to export accounts");
}
