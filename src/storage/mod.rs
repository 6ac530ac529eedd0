//! Storage layer for Kakeibo
//!
//! Transactions live in memory for the session only. The store is seeded
//! with a mock month or with transactions imported from CSV.

pub mod seed;
pub mod transactions;

pub use seed::{seed_transactions, seeded_store};
pub use transactions::TransactionStore;
