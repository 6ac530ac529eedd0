//! In-memory transaction store
//!
//! The store is the only mutable state of the engine. It is append-only:
//! `append` is the single mutator and every successful append bumps a
//! version counter that derived views use to detect staleness.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{
    display_date, CategoryCatalog, CategoryId, Money, NewTransaction, Transaction, TransactionId,
};

/// Append-only list of transactions bound to a category catalog
#[derive(Debug, Clone)]
pub struct TransactionStore {
    catalog: CategoryCatalog,
    transactions: Vec<Transaction>,
    version: u64,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            catalog,
            transactions: Vec::new(),
            version: 0,
        }
    }

    /// Create a store holding an initial list (seed data or an import)
    ///
    /// Every transaction must be valid, reference a known category and
    /// carry a unique id.
    pub fn with_transactions(
        catalog: CategoryCatalog,
        transactions: Vec<Transaction>,
    ) -> KakeiboResult<Self> {
        let mut seen = HashSet::new();
        let mut total = Money::zero();
        for txn in &transactions {
            txn.validate()?;
            catalog.require(&txn.category)?;
            total = total.checked_add(txn.amount).ok_or_else(|| {
                KakeiboError::invalid_input(format!(
                    "transaction {} would overflow the total spent",
                    txn.id
                ))
            })?;
            if !seen.insert(txn.id.clone()) {
                return Err(KakeiboError::invalid_input(format!(
                    "duplicate transaction id: {}",
                    txn.id
                )));
            }
        }

        debug!(count = transactions.len(), "Loaded transactions into store");

        Ok(Self {
            catalog,
            transactions,
            version: 0,
        })
    }

    /// Validate raw quick-entry values and append them, dated today
    pub fn record(&mut self, amount: f64, category: &str) -> KakeiboResult<Transaction> {
        let input = NewTransaction::validate(amount, category).inspect_err(|e| {
            warn!(error = %e, "Rejected quick-entry input");
        })?;
        self.append(input)
    }

    /// Append a transaction dated with the current local date
    pub fn append(&mut self, input: NewTransaction) -> KakeiboResult<Transaction> {
        self.append_on(input, Local::now().date_naive())
    }

    /// Append a transaction dated `today`
    ///
    /// Assigns a fresh id and uses the category's display name as the
    /// description. On error the store is left unchanged.
    pub fn append_on(
        &mut self,
        input: NewTransaction,
        today: NaiveDate,
    ) -> KakeiboResult<Transaction> {
        if !input.amount.is_positive() {
            return Err(KakeiboError::invalid_input(format!(
                "amount must be positive, got {}",
                input.amount.units()
            )));
        }

        let definition = self.catalog.require(&input.category).inspect_err(|e| {
            warn!(error = %e, "Rejected transaction for unknown category");
        })?;

        if self.total_spent().checked_add(input.amount).is_none() {
            warn!(amount = input.amount.units(), "Rejected transaction overflowing the total");
            return Err(KakeiboError::invalid_input(format!(
                "amount {} would overflow the total spent",
                input.amount.units()
            )));
        }

        let txn = Transaction::new(
            TransactionId::generate(),
            display_date(today),
            definition.display_name.clone(),
            input.amount,
            input.category,
        );

        self.transactions.push(txn.clone());
        self.version += 1;

        debug!(
            id = %txn.id,
            category = %txn.category,
            amount = txn.amount.units(),
            version = self.version,
            "Appended transaction"
        );

        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions of one category in insertion order
    pub fn by_category(&self, category: &CategoryId) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| &t.category == category)
            .collect()
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Counter bumped by every successful append
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all transaction amounts
    pub fn total_spent(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}
