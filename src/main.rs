use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use strata_ledger::application::engine::PaymentEngine;
use strata_ledger::domain::account::{Account, AccountId, Amount, Balance};
use strata_ledger::domain::transaction::{PaymentMethod, Transaction, TransactionId};
use strata_ledger::interfaces::csv::account_reader::AccountReader;
use strata_ledger::interfaces::csv::account_writer::AccountWriter;
use strata_ledger::interfaces::csv::transaction_reader::TransactionReader;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Settles transactions between accounts and prints the final balances.
///
/// Without input files the built-in demonstration scenario is run.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accounts CSV file (id,name,balance)
    #[arg(long, requires = "transactions")]
    accounts: Option<PathBuf>,

    /// Transactions CSV file (id,amount,sender,recipient,method)
    #[arg(long, requires = "accounts")]
    transactions: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "strata_ledger=info".into()),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Two accounts and a single cash payment between them.
fn demonstration_scenario() -> Result<(Vec<Account>, Vec<Transaction>)> {
    let accounts = vec![
        Account::new(AccountId(1), "My first account", Balance::new(150)),
        Account::new(AccountId(2), "Online store", Balance::new(5)),
    ];
    let transactions = vec![Transaction::new(
        TransactionId(1),
        Amount::new(55)?,
        AccountId(1),
        AccountId(2),
        PaymentMethod::Cash,
    )];
    Ok((accounts, transactions))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut engine = PaymentEngine::new();

    let transactions = match (cli.accounts, cli.transactions) {
        (Some(accounts_path), Some(transactions_path)) => {
            let file = File::open(accounts_path).into_diagnostic()?;
            for account in AccountReader::new(file).accounts() {
                match account.and_then(|account| engine.open_account(account)) {
                    Ok(()) => {}
                    Err(e) => error!("Error reading account: {}", e),
                }
            }

            let file = File::open(transactions_path).into_diagnostic()?;
            let mut transactions = Vec::new();
            for tx in TransactionReader::new(file).transactions() {
                match tx {
                    Ok(tx) => transactions.push(tx),
                    Err(e) => error!("Error reading transaction: {}", e),
                }
            }
            transactions
        }
        _ => {
            let (accounts, transactions) = demonstration_scenario()?;
            for account in accounts {
                engine.open_account(account)?;
            }
            transactions
        }
    };

    // The engine already warns on rejections; the run carries on with the rest.
    for mut tx in transactions {
        if let Err(e) = engine.submit(&mut tx) {
            debug!(tx = %tx.id(), state = ?tx.state(), "Error processing transaction: {}", e);
        }
    }

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(engine.accounts())?;

    Ok(())
}
