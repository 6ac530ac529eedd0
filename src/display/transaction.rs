//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::{CategoryCatalog, Transaction};

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, catalog: &CategoryCatalog, symbol: &str) -> String {
    let category = catalog
        .get(&txn.category)
        .map(|c| c.display_name.as_str())
        .unwrap_or(txn.category.as_str());

    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        txn.description.as_str()
    };

    format!(
        "{:6} {} {:14} {:>12}",
        txn.date,
        truncate(description, 24),
        truncate(category, 14),
        txn.amount.format_with_symbol(symbol)
    )
}

/// Format a list of transactions with a total line
pub fn format_transaction_list(
    transactions: &[&Transaction],
    catalog: &CategoryCatalog,
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:6} {:24} {:14} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(59));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, catalog, symbol));
        output.push('\n');
    }

    let total: crate::models::Money = transactions.iter().map(|t| t.amount).sum();
    output.push_str(&"-".repeat(59));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), total {}\n",
        transactions.len(),
        total.format_with_symbol(symbol)
    ));

    output
}

/// Pad or cut `s` to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
