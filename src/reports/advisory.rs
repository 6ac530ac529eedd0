//! Advisory message
//!
//! Turns the primary goal's status into one actionable message. Severity
//! only drives styling in the presentation layer.

use serde::Serialize;
use std::fmt;

use super::ranking::Goal;
use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Success => write!(f, "success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    /// Build the advisory for a goal, formatting amounts with `symbol`
    pub fn for_goal(goal: &Goal, symbol: &str) -> Self {
        let percentage = goal.percentage();
        let remaining = goal.remaining();

        if percentage >= 100.0 {
            Self {
                severity: Severity::Warning,
                message: format!(
                    "{} is over budget. Try to hold back for the rest of the month.",
                    goal.label
                ),
            }
        } else if percentage >= 80.0 {
            let allowance = daily_allowance(remaining, goal.days_remaining);
            Self {
                severity: Severity::Warning,
                message: format!(
                    "{} spending is running fast. {} days left: keep it to {} a day.",
                    goal.label,
                    goal.days_remaining,
                    allowance.format_with_symbol(symbol)
                ),
            }
        } else {
            Self {
                severity: Severity::Success,
                message: format!(
                    "On track! {} left in the {} budget.",
                    remaining.format_with_symbol(symbol),
                    goal.label
                ),
            }
        }
    }
}

/// `floor(remaining / days)`; with no days left the whole remainder
pub fn daily_allowance(remaining: Money, days_remaining: u32) -> Money {
    if days_remaining == 0 {
        return remaining;
    }
    Money::from_units(remaining.units().div_euclid(i64::from(days_remaining)))
}
