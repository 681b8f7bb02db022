pub(crate) use clap::Parser;
use clap::{Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "bank-ledger",
    author,
    version,
    about = "A toy in-memory banking ledger",
    long_about = None,
    after_help = "STATE:\n    Every run starts from the built-in sample ledger and nothing is saved.\n    Notices are logged to stderr; set RUST_LOG to change verbosity:\n\n    RUST_LOG=debug bank-ledger report --history"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the sample scenario: withdraw, deposit and transfer, then report
    Demo,
    /// Print clients, accounts and balances of the sample ledger
    Report {
        /// Also list every account's transaction history
        #[arg(long)]
        history: bool,
    },
    /// Write the sample ledger as CSV to stdout
    Export {
        #[arg(value_enum)]
        table: Table,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Table {
    Accounts,
    History,
}
