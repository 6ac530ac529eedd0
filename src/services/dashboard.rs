//! Dashboard service
//!
//! Owns the session's transaction store together with the goal table and
//! settings, and hands out the derived dashboard. The dashboard is cached
//! against the store version so an append always invalidates it.

use tracing::debug;

use crate::config::Settings;
use crate::error::KakeiboResult;
use crate::models::{GoalGroups, NewTransaction, Transaction};
use crate::reports::{derive_dashboard, Dashboard};
use crate::storage::TransactionStore;

/// Session state behind the dashboard
pub struct DashboardService {
    store: TransactionStore,
    groups: GoalGroups,
    settings: Settings,
    cache: Option<(u64, Dashboard)>,
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(store: TransactionStore, groups: GoalGroups, settings: Settings) -> Self {
        Self {
            store,
            groups,
            settings,
            cache: None,
        }
    }

    /// The dashboard for the current store contents
    ///
    /// Recomputed only when the store changed since the last call.
    pub fn dashboard(&mut self) -> KakeiboResult<&Dashboard> {
        let version = self.store.version();

        let entry = match self.cache.take() {
            Some((cached, dashboard)) if cached == version => (cached, dashboard),
            _ => {
                let dashboard = derive_dashboard(
                    self.store.transactions(),
                    self.store.catalog(),
                    &self.groups,
                    &self.settings,
                )?;
                debug!(
                    version,
                    transactions = self.store.len(),
                    score = dashboard.score.score,
                    "Recomputed dashboard"
                );
                (version, dashboard)
            }
        };

        Ok(&self.cache.insert(entry).1)
    }

    /// Validate quick-entry values and append them to the store
    pub fn record(&mut self, amount: f64, category: &str) -> KakeiboResult<Transaction> {
        self.store.record(amount, category)
    }

    /// Append already validated input
    pub fn append(&mut self, input: NewTransaction) -> KakeiboResult<Transaction> {
        self.store.append(input)
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Store version the cached dashboard was derived from, if any
    pub fn cached_version(&self) -> Option<u64> {
        self.cache.as_ref().map(|(version, _)| *version)
    }
}
