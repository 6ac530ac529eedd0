//! Category aggregation
//!
//! Reduces a transaction list into per-category totals and recent
//! transactions. Categories appear in the order they are first seen in the
//! list; categories without transactions are absent.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::KakeiboResult;
use crate::models::{
    consumption_percentage, CategoryCatalog, CategoryId, IconTag, Money, Transaction,
};

/// How many recent transactions each aggregate keeps
pub const RECENT_TRANSACTION_LIMIT: usize = 5;

/// Spending rolled up for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category_id: CategoryId,
    pub display_name: String,
    pub icon: IconTag,
    pub total_spent: Money,
    pub budget: Money,
    /// `total_spent / budget * 100` against this category's own budget
    pub percentage: f64,
    pub transaction_count: usize,
    /// Last five transactions, most recent first
    pub recent_transactions: Vec<Transaction>,
}

impl CategoryAggregate {
    /// Strictly over the budget ceiling
    pub fn is_over_budget(&self) -> bool {
        self.percentage > 100.0
    }

    /// Past 80% of the budget
    pub fn is_near_limit(&self) -> bool {
        self.percentage > 80.0
    }

    /// Budget left (negative when overspent)
    pub fn remaining_budget(&self) -> Money {
        self.budget - self.total_spent
    }
}

/// All category aggregates for a transaction list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    categories: Vec<CategoryAggregate>,
    total_spent: Money,
}

impl Aggregates {
    /// Aggregate `transactions` against `catalog`
    ///
    /// Fails with `UnknownCategory` on the first transaction whose category
    /// the catalog does not define.
    pub fn compute(transactions: &[Transaction], catalog: &CategoryCatalog) -> KakeiboResult<Self> {
        let mut index: HashMap<&CategoryId, usize> = HashMap::new();
        let mut buckets: Vec<(&CategoryId, Money, Vec<&Transaction>)> = Vec::new();
        let mut total_spent = Money::zero();

        for txn in transactions {
            catalog.require(&txn.category)?;

            let slot = *index.entry(&txn.category).or_insert_with(|| {
                buckets.push((&txn.category, Money::zero(), Vec::new()));
                buckets.len() - 1
            });

            let bucket = &mut buckets[slot];
            bucket.1 += txn.amount;
            bucket.2.push(txn);
            total_spent += txn.amount;
        }

        let mut categories = Vec::with_capacity(buckets.len());
        for (category_id, spent, txns) in buckets {
            let def = catalog.require(category_id)?;

            let recent_transactions = txns
                .iter()
                .rev()
                .take(RECENT_TRANSACTION_LIMIT)
                .map(|t| (*t).clone())
                .collect();

            categories.push(CategoryAggregate {
                category_id: category_id.clone(),
                display_name: def.display_name.clone(),
                icon: def.icon,
                total_spent: spent,
                budget: def.monthly_budget,
                percentage: consumption_percentage(spent, def.monthly_budget),
                transaction_count: txns.len(),
                recent_transactions,
            });
        }

        Ok(Self {
            categories,
            total_spent,
        })
    }

    pub fn get(&self, id: &CategoryId) -> Option<&CategoryAggregate> {
        self.categories.iter().find(|c| &c.category_id == id)
    }

    /// Amount spent in a category, zero when it has no transactions
    pub fn spent_in(&self, id: &CategoryId) -> Money {
        self.get(id).map(|c| c.total_spent).unwrap_or_default()
    }

    /// Aggregates in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryAggregate> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of every transaction amount
    pub fn total_spent(&self) -> Money {
        self.total_spent
    }
}
