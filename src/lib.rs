//! Kakeibo - budget analytics for a personal-finance dashboard
//!
//! This library derives the dashboard of a month of expenses: per-category
//! spending rollups, goal progress, a balance forecast, a budget health
//! score with its reasons, and one advisory message. Transactions live in
//! an append-only in-memory store; every derived view is recomputed from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, ids, transactions, the category catalog and goal groups
//! - `storage`: The transaction store and seed data
//! - `reports`: The analytics engine (aggregation, ranking, forecast, score, advisory)
//! - `services`: Dashboard caching and CSV import
//! - `cli`: Command handlers for the `kakeibo` binary
//! - `display`: Terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::Settings;
//! use kakeibo::models::{CategoryCatalog, GoalGroups};
//! use kakeibo::reports::derive_dashboard;
//! use kakeibo::storage::seed_transactions;
//!
//! let dashboard = derive_dashboard(
//!     &seed_transactions(),
//!     &CategoryCatalog::default(),
//!     &GoalGroups::default(),
//!     &Settings::default(),
//! )?;
//! println!("{}", dashboard.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
