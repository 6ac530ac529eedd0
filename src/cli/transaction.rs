//! Transaction CLI commands
//!
//! Implements quick entry (`add`) and the transaction listing.

use std::path::PathBuf;

use clap::Args;

use super::open_session;
use crate::config::Settings;
use crate::display::transaction::{format_transaction_list, format_transaction_row};
use crate::error::KakeiboResult;
use crate::models::{CategoryId, NewTransaction};

/// Arguments of the `add` command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "980" or "1,200")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category id (see `kakeibo categories`)
    pub category: String,

    /// CSV file to load instead of the seed month
    #[arg(short, long)]
    pub transactions: Option<PathBuf>,
}

/// Arguments of the `transactions` command
#[derive(Args, Debug)]
pub struct TransactionsArgs {
    /// CSV file to load instead of the seed month
    #[arg(short, long)]
    pub transactions: Option<PathBuf>,

    /// Only show one category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Handle the `add` command
///
/// Records into the session and prints the refreshed score and advisory.
pub fn handle_add_command(settings: &Settings, args: AddArgs) -> KakeiboResult<()> {
    let mut service = open_session(args.transactions.as_deref(), settings)?;
    let input = NewTransaction::parse(&args.amount, &args.category)?;
    let txn = service.append(input)?;

    println!(
        "Recorded: {}",
        format_transaction_row(&txn, service.store().catalog(), &settings.currency_symbol)
            .trim_end()
    );

    let dashboard = service.dashboard()?;
    println!(
        "Budget Score: {} / 100 (Grade {})",
        dashboard.score.score, dashboard.score.grade
    );
    println!(
        "[{}] {}",
        dashboard.advisory.severity.to_string().to_uppercase(),
        dashboard.advisory.message
    );

    Ok(())
}

/// Handle the `transactions` command
pub fn handle_transactions_command(settings: &Settings, args: TransactionsArgs) -> KakeiboResult<()> {
    let service = open_session(args.transactions.as_deref(), settings)?;
    let store = service.store();

    let transactions = match &args.category {
        Some(category) => {
            let id = CategoryId::new(category.trim());
            store.catalog().require(&id)?;
            store.by_category(&id)
        }
        None => store.transactions().iter().collect(),
    };

    print!(
        "{}",
        format_transaction_list(&transactions, store.catalog(), &settings.currency_symbol)
    );
    Ok(())
}
