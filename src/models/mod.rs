//! Core data models for Kakeibo
//!
//! This module contains the static inputs of the analytics engine: money,
//! ids, transactions, the category catalog and the goal group table.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{consumption_percentage, BudgetStatus, OVER_BUDGET_SENTINEL};
pub use category::{CategoryCatalog, CategoryDefinition, IconTag};
pub use goal::{GoalGroup, GoalGroups};
pub use ids::{CategoryId, GoalGroupId, TransactionId};
pub use money::Money;
pub use transaction::{display_date, NewTransaction, Transaction};
