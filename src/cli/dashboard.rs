//! Dashboard CLI command
//!
//! Derives and prints the dashboard, optionally after recording quick
//! entries into the session.

use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use super::open_session;
use crate::config::Settings;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::NewTransaction;

/// Arguments of the `dashboard` command
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Record an expense first, as AMOUNT:CATEGORY (repeatable)
    #[arg(short, long = "add", value_name = "AMOUNT:CATEGORY")]
    pub add: Vec<String>,

    /// CSV file to load instead of the seed month
    #[arg(short, long)]
    pub transactions: Option<PathBuf>,

    /// Print the dashboard as JSON
    #[arg(long)]
    pub json: bool,
}

/// Split a quick entry of the form `AMOUNT:CATEGORY` and validate it
pub fn parse_quick_entry(entry: &str) -> KakeiboResult<NewTransaction> {
    let (amount, category) = entry.rsplit_once(':').ok_or_else(|| {
        KakeiboError::invalid_input(format!("expected AMOUNT:CATEGORY, got '{}'", entry))
    })?;
    NewTransaction::parse(amount, category)
}

/// Handle the `dashboard` command
pub fn handle_dashboard_command(settings: &Settings, args: DashboardArgs) -> KakeiboResult<()> {
    let mut service = open_session(args.transactions.as_deref(), settings)?;

    for entry in &args.add {
        parse_quick_entry(entry)
            .and_then(|input| service.append(input))
            .inspect_err(|e| {
                if e.is_validation() {
                    warn!(entry = %entry, error = %e, "Rejected quick entry");
                }
            })?;
    }

    let dashboard = service.dashboard()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
    } else {
        print!("{}", dashboard.format_terminal());
    }

    Ok(())
}
