//! Service layer for Kakeibo
//!
//! The service layer sits between the CLI and the engine: it owns the
//! session store, caches the derived dashboard and loads imported data.

pub mod dashboard;
pub mod import;

pub use dashboard::DashboardService;
pub use import::{ColumnMapping, ImportService};
