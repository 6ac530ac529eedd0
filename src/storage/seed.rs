//! Seed data
//!
//! The mock month the dashboard starts from before the user records
//! anything: fourteen expenses across food, cafe, transport and
//! entertainment totalling ¥43,350.

use crate::error::KakeiboResult;
use crate::models::{CategoryCatalog, Money, Transaction};

use super::transactions::TransactionStore;

const SEED: &[(&str, &str, &str, i64, &str)] = &[
    ("1", "11/1", "Supermarket", 3200, "food"),
    ("2", "11/2", "Convenience store", 850, "food"),
    ("3", "11/3", "Restaurant", 4500, "food"),
    ("4", "11/5", "Supermarket", 5600, "food"),
    ("5", "11/7", "Cafe", 1200, "cafe"),
    ("6", "11/1", "Commuter pass", 12000, "transport"),
    ("7", "11/4", "Taxi", 2800, "transport"),
    ("8", "11/8", "Bus", 1200, "transport"),
    ("9", "11/12", "Gasoline", 2000, "transport"),
    ("10", "11/2", "Movie", 2000, "entertainment"),
    ("11", "11/6", "Books", 3500, "entertainment"),
    ("12", "11/9", "Video game", 6800, "entertainment"),
    ("13", "11/14", "Karaoke", 3200, "entertainment"),
    ("14", "11/16", "Concert tickets", 6500, "entertainment"),
];

/// The seed transactions in their original order
pub fn seed_transactions() -> Vec<Transaction> {
    SEED.iter()
        .map(|(id, date, description, amount, category)| {
            Transaction::new(*id, *date, *description, Money::from_units(*amount), *category)
        })
        .collect()
}

/// A store over the default catalog holding the seed transactions
pub fn seeded_store() -> KakeiboResult<TransactionStore> {
    TransactionStore::with_transactions(CategoryCatalog::default(), seed_transactions())
}
