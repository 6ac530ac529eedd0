//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod dashboard;
pub mod transaction;

use std::path::Path;

use tracing::info;

use crate::config::Settings;
use crate::error::KakeiboResult;
use crate::models::{CategoryCatalog, GoalGroups};
use crate::services::{DashboardService, ImportService};
use crate::storage::{seeded_store, TransactionStore};

pub use category::handle_categories_command;
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use transaction::{handle_add_command, handle_transactions_command, AddArgs, TransactionsArgs};

/// Open a session over the default catalog
///
/// Starts from the imported CSV when `transactions` is given, otherwise
/// from the seed month.
pub fn open_session(
    transactions: Option<&Path>,
    settings: &Settings,
) -> KakeiboResult<DashboardService> {
    let store = load_store(transactions)?;
    Ok(DashboardService::new(
        store,
        GoalGroups::default(),
        settings.clone(),
    ))
}

fn load_store(transactions: Option<&Path>) -> KakeiboResult<TransactionStore> {
    match transactions {
        Some(path) => {
            let catalog = CategoryCatalog::default();
            ImportService::new(&catalog).load_store(path)
        }
        None => {
            info!("No transaction file given, using the seed month");
            seeded_store()
        }
    }
}
