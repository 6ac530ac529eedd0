//! Category definitions and the category catalog
//!
//! The catalog is static for the engine's lifetime: one definition per
//! category id, each with a positive monthly budget ceiling.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;
use crate::error::{KakeiboError, KakeiboResult};

/// Icon shown next to a category in the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    Food,
    Transport,
    Shopping,
    Home,
    #[default]
    Other,
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Home => "home",
            Self::Other => "other",
        };
        f.write_str(tag)
    }
}

/// A spending bucket with its monthly budget ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    pub display_name: String,
    pub icon: IconTag,
    pub monthly_budget: Money,
}

impl CategoryDefinition {
    pub fn new(
        id: impl Into<CategoryId>,
        display_name: impl Into<String>,
        icon: IconTag,
        monthly_budget: Money,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon,
            monthly_budget,
        }
    }
}

impl fmt::Display for CategoryDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Static mapping from category id to its definition
///
/// Definitions keep their declaration order, which is the order
/// categories are listed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCatalog {
    definitions: Vec<CategoryDefinition>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting empty or duplicate ids and zero budgets
    pub fn new(definitions: Vec<CategoryDefinition>) -> KakeiboResult<Self> {
        let mut seen = HashSet::new();
        for def in &definitions {
            if def.id.as_str().trim().is_empty() {
                return Err(KakeiboError::Config("category id cannot be empty".into()));
            }
            if !seen.insert(def.id.clone()) {
                return Err(KakeiboError::Config(format!(
                    "duplicate category id: {}",
                    def.id
                )));
            }
            if !def.monthly_budget.is_positive() {
                return Err(KakeiboError::zero_category_budget(def.id.as_str()));
            }
        }

        Ok(Self { definitions })
    }

    /// Look up a definition by id
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryDefinition> {
        self.definitions.iter().find(|d| &d.id == id)
    }

    /// Look up a definition, failing with `UnknownCategory` when absent
    pub fn require(&self, id: &CategoryId) -> KakeiboResult<&CategoryDefinition> {
        self.get(id)
            .ok_or_else(|| KakeiboError::unknown_category(id.as_str()))
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Sum of every category's monthly budget
    pub fn total_budget(&self) -> Money {
        self.definitions.iter().map(|d| d.monthly_budget).sum()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let definitions = vec![
            CategoryDefinition::new("food", "Food", IconTag::Food, Money::from_units(50_000)),
            CategoryDefinition::new(
                "transport",
                "Transport",
                IconTag::Transport,
                Money::from_units(15_000),
            ),
            CategoryDefinition::new(
                "shopping",
                "Shopping",
                IconTag::Shopping,
                Money::from_units(30_000),
            ),
            CategoryDefinition::new("home", "Housing", IconTag::Home, Money::from_units(80_000)),
            CategoryDefinition::new("cafe", "Cafe", IconTag::Food, Money::from_units(10_000)),
            CategoryDefinition::new(
                "entertainment",
                "Entertainment",
                IconTag::Shopping,
                Money::from_units(25_000),
            ),
        ];
        Self { definitions }
    }
}
