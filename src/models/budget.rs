//! Budget consumption helpers
//!
//! Percentages are `spent / budget * 100`. A zero budget never yields NaN or
//! infinity: nothing spent is 0%, anything spent is [`OVER_BUDGET_SENTINEL`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Percentage reported for spending against a zero budget
pub const OVER_BUDGET_SENTINEL: f64 = 9999.0;

/// Budget consumption as a percentage
pub fn consumption_percentage(spent: Money, budget: Money) -> f64 {
    if budget.is_positive() {
        spent.as_f64() / budget.as_f64() * 100.0
    } else if spent.is_positive() {
        OVER_BUDGET_SENTINEL
    } else {
        0.0
    }
}

/// Traffic-light status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Below 80% consumed
    OnTrack,
    /// 80% or more consumed
    Caution,
    /// 100% or more consumed
    Exceeded,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else if percentage >= 80.0 {
            Self::Caution
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::Caution => write!(f, "Caution"),
            Self::Exceeded => write!(f, "Over budget"),
        }
    }
}
