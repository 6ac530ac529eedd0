//! Goal grouping table
//!
//! A goal group merges one or more categories for goal tracking (food and
//! cafe share the "food" goal). The table is an explicit mapping from group
//! id to member category ids; the first group is the primary group that the
//! scorer and advisor look at.

use serde::Serialize;

use super::category::CategoryCatalog;
use super::ids::{CategoryId, GoalGroupId};
use super::money::Money;
use crate::error::{KakeiboError, KakeiboResult};

/// One goal group and its member categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalGroup {
    pub id: GoalGroupId,
    pub members: Vec<CategoryId>,
}

impl GoalGroup {
    pub fn new<I, C>(id: impl Into<GoalGroupId>, members: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CategoryId>,
    {
        Self {
            id: id.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Display label: the name of the category sharing the group's id
    pub fn label(&self, catalog: &CategoryCatalog) -> String {
        catalog
            .get(&CategoryId::new(self.id.as_str()))
            .map(|def| def.display_name.clone())
            .unwrap_or_else(|| self.id.to_string())
    }

    /// Sum of the member categories' budgets
    pub fn target(&self, catalog: &CategoryCatalog) -> Money {
        self.members
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|def| def.monthly_budget)
            .sum()
    }
}

/// Ordered goal group table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalGroups {
    groups: Vec<GoalGroup>,
}

impl GoalGroups {
    /// Build a table, checking every group has members known to the catalog
    pub fn new(groups: Vec<GoalGroup>, catalog: &CategoryCatalog) -> KakeiboResult<Self> {
        if groups.is_empty() {
            return Err(KakeiboError::Config(
                "goal group table needs at least one group".into(),
            ));
        }

        for group in &groups {
            if group.members.is_empty() {
                return Err(KakeiboError::empty_goal_group(group.id.as_str()));
            }
            for member in &group.members {
                catalog.require(member)?;
            }
        }

        Ok(Self { groups })
    }

    /// The group the scorer and advisor focus on
    pub fn primary(&self) -> &GoalGroup {
        // `new` and `default` never produce an empty table
        &self.groups[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoalGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GoalGroups {
    fn default() -> Self {
        Self {
            groups: vec![
                GoalGroup::new("food", ["food", "cafe"]),
                GoalGroup::new("transport", ["transport"]),
                GoalGroup::new("shopping", ["shopping"]),
                GoalGroup::new("entertainment", ["entertainment"]),
                GoalGroup::new("home", ["home"]),
            ],
        }
    }
}
