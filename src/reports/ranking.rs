//! Ranking of categories and goals
//!
//! Both rankings sort by consumption percentage, highest first. The sorts
//! are stable, so ties keep first-seen (categories) or table (goals) order.

use serde::Serialize;

use super::aggregate::{Aggregates, CategoryAggregate};
use crate::models::{
    consumption_percentage, BudgetStatus, CategoryCatalog, GoalGroupId, GoalGroups, Money,
};

/// Progress of one goal group against its combined budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub group_id: GoalGroupId,
    pub label: String,
    /// Spend summed over the group's categories
    pub current: Money,
    /// Budget summed over the group's categories
    pub target: Money,
    pub days_remaining: u32,
}

impl Goal {
    pub fn percentage(&self) -> f64 {
        consumption_percentage(self.current, self.target)
    }

    /// Budget left (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.target - self.current
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage())
    }
}

/// Top `limit` categories by consumption percentage
pub fn category_highlights(aggregates: &Aggregates, limit: usize) -> Vec<CategoryAggregate> {
    let mut ranked: Vec<&CategoryAggregate> = aggregates.iter().collect();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    ranked.into_iter().take(limit).cloned().collect()
}

/// One goal per group, highest consumption first, none dropped
pub fn rank_goals(
    aggregates: &Aggregates,
    catalog: &CategoryCatalog,
    groups: &GoalGroups,
    days_remaining: u32,
) -> Vec<Goal> {
    let mut goals: Vec<Goal> = groups
        .iter()
        .map(|group| Goal {
            group_id: group.id.clone(),
            label: group.label(catalog),
            current: group.members.iter().map(|id| aggregates.spent_in(id)).sum(),
            target: group.target(catalog),
            days_remaining,
        })
        .collect();

    goals.sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
    goals
}

/// The goal of the table's primary group
pub fn primary_goal<'a>(goals: &'a [Goal], groups: &GoalGroups) -> Option<&'a Goal> {
    let primary = &groups.primary().id;
    goals.iter().find(|g| &g.group_id == primary)
}
