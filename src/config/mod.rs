//! Configuration module for Kakeibo
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Budget period parameters for the forecast

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::{PeriodSettings, ProjectionCheckpoint, Settings, TrendCheckpoint};
