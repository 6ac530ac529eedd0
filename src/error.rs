//! Custom error types for Kakeibo
//!
//! This module defines the error hierarchy for the engine and its CLI using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Kakeibo operations
#[derive(Error, Debug)]
pub enum KakeiboError {
    /// Amount or category supplied to the quick-entry path was rejected
    #[error("Invalid transaction input: {0}")]
    InvalidTransactionInput(String),

    /// A transaction referenced a category id the catalog does not define
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A budget that would make consumption percentages undefined
    #[error("Degenerate budget for {kind} '{identifier}': {reason}")]
    DegenerateBudget {
        kind: &'static str,
        identifier: String,
        reason: &'static str,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl KakeiboError {
    /// Create an "unknown category" error
    pub fn unknown_category(identifier: impl Into<String>) -> Self {
        Self::UnknownCategory(identifier.into())
    }

    /// Create an "invalid transaction input" error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidTransactionInput(reason.into())
    }

    /// Create a degenerate budget error for a category
    pub fn zero_category_budget(identifier: impl Into<String>) -> Self {
        Self::DegenerateBudget {
            kind: "category",
            identifier: identifier.into(),
            reason: "monthly budget must be positive",
        }
    }

    /// Create a degenerate budget error for a goal group
    pub fn empty_goal_group(identifier: impl Into<String>) -> Self {
        Self::DegenerateBudget {
            kind: "goal group",
            identifier: identifier.into(),
            reason: "group has no member categories",
        }
    }

    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransactionInput(_) | Self::UnknownCategory(_)
        )
    }
}

impl From<std::io::Error> for KakeiboError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KakeiboError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for KakeiboError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for Kakeibo operations
pub type KakeiboResult<T> = Result<T, KakeiboError>;
