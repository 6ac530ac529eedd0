//! Dashboard
//!
//! Bundles every derived view of a transaction list: spending highlights,
//! goals, score, forecast and advisory. [`derive_dashboard`] is a pure
//! function of its inputs.

use serde::Serialize;

use super::advisory::Advisory;
use super::aggregate::{Aggregates, CategoryAggregate};
use super::forecast::Forecast;
use super::ranking::{category_highlights, primary_goal, rank_goals, Goal};
use super::score::{ScoreInputs, ScoreResult};
use crate::config::Settings;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{CategoryCatalog, GoalGroups, Money, Transaction};

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub category_highlights: Vec<CategoryAggregate>,
    pub goals: Vec<Goal>,
    pub score: ScoreResult,
    pub forecast: Forecast,
    pub advisory: Advisory,
    pub total_spent: Money,
    pub total_budget: Money,
    #[serde(skip)]
    currency_symbol: String,
}

/// Derive the dashboard for `transactions`
///
/// Fails only when a transaction references a category missing from the
/// catalog, or when the goal table's primary group is missing.
pub fn derive_dashboard(
    transactions: &[Transaction],
    catalog: &CategoryCatalog,
    groups: &GoalGroups,
    settings: &Settings,
) -> KakeiboResult<Dashboard> {
    let aggregates = Aggregates::compute(transactions, catalog)?;
    let total_spent = aggregates.total_spent();
    let total_budget = catalog.total_budget();

    let category_highlights = category_highlights(&aggregates, settings.highlight_count);
    let goals = rank_goals(
        &aggregates,
        catalog,
        groups,
        settings.period.remaining_days,
    );

    let primary = primary_goal(&goals, groups)
        .ok_or_else(|| KakeiboError::empty_goal_group(groups.primary().id.as_str()))?;

    let score = ScoreResult::evaluate(&ScoreInputs {
        primary_goal: primary,
        total_spent,
        total_budget,
        highlights: &category_highlights,
    });
    let advisory = Advisory::for_goal(primary, &settings.currency_symbol);
    let forecast = Forecast::project(total_spent, &settings.period);

    Ok(Dashboard {
        category_highlights,
        goals,
        score,
        forecast,
        advisory,
        total_spent,
        total_budget,
        currency_symbol: settings.currency_symbol.clone(),
    })
}

impl Dashboard {
    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        // Score
        let health = if self.score.grade.is_healthy() {
            "healthy"
        } else {
            "needs attention"
        };
        output.push_str(&format!(
            "Budget Score: {} / 100 (Grade {}) [{}]\n",
            self.score.score, self.score.grade, health
        ));
        for reason in &self.score.reasons {
            output.push_str(&format!("  • {}\n", reason));
        }
        output.push('\n');

        // Advisory
        output.push_str(&format!(
            "[{}] {}\n",
            self.advisory.severity.to_string().to_uppercase(),
            self.advisory.message
        ));
        output.push('\n');

        // Goals
        output.push_str("Goals\n");
        output.push_str(&"-".repeat(64));
        output.push('\n');
        for goal in &self.goals {
            output.push_str(&format!(
                "{:<16} {:>10} / {:<10} {:>5.0}%  {}\n",
                goal.label,
                self.money(goal.current),
                self.money(goal.target),
                goal.percentage().min(100.0),
                goal.status()
            ));
        }
        output.push('\n');

        // Forecast
        let forecast = &self.forecast;
        output.push_str(&format!(
            "Balance Forecast: {} now, {} projected at period end ({})\n",
            self.money(forecast.current_balance),
            self.money(forecast.projected_balance),
            signed(&self.money(forecast.change()), forecast.change())
        ));
        for point in &forecast.points {
            match (point.actual(), point.predicted()) {
                (Some(actual), _) => {
                    output.push_str(&format!(
                        "  {:<8} {:>12}\n",
                        point.label,
                        self.money(actual)
                    ));
                }
                (None, Some(predicted)) => {
                    output.push_str(&format!(
                        "  {:<8} {:>12}  (projected)\n",
                        point.label,
                        self.money(predicted)
                    ));
                }
                (None, None) => {}
            }
        }
        output.push('\n');

        // Highlights
        output.push_str(&format!(
            "Top Spending (top {})\n",
            self.category_highlights.len()
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');
        for category in &self.category_highlights {
            let flag = if category.is_over_budget() {
                format!("  OVER by {}", self.money(-category.remaining_budget()))
            } else if category.is_near_limit() {
                "  near limit".to_string()
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{:<16} {:>10} / {:<10} {:>5.0}%{}\n",
                category.display_name,
                self.money(category.total_spent),
                self.money(category.budget),
                category.percentage,
                flag
            ));
            for txn in &category.recent_transactions {
                output.push_str(&format!(
                    "    {:<6} {:<20} {:>10}\n",
                    txn.date,
                    txn.description,
                    self.money(txn.amount)
                ));
            }
        }

        output
    }
}

fn signed(formatted: &str, amount: Money) -> String {
    if amount.is_positive() {
        format!("+{}", formatted)
    } else {
        formatted.to_string()
    }
}
