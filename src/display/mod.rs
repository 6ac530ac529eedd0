//! Display formatting for terminal output
//!
//! Provides utilities for formatting the catalog, goal groups and
//! transaction lists for terminal display. The dashboard formats itself.

pub mod category;
pub mod transaction;

pub use category::{format_catalog, format_goal_groups};
pub use transaction::{format_transaction_list, format_transaction_row};
