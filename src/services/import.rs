//! CSV import service
//!
//! Loads an alternative transaction list from CSV. The header names the
//! columns (`date`, `description`, `amount`, `category`, and optionally a
//! leading `id`), matched case-insensitively in any order. Each row goes
//! through the same validation as quick entry.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{CategoryCatalog, NewTransaction, Transaction, TransactionId};
use crate::storage::TransactionStore;

/// Column positions found in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub id_column: Option<usize>,
    pub date_column: usize,
    pub description_column: Option<usize>,
    pub amount_column: usize,
    pub category_column: usize,
}

impl ColumnMapping {
    /// Detect column positions from the header record
    pub fn from_headers(headers: &StringRecord) -> KakeiboResult<Self> {
        let mut id_column = None;
        let mut date_column = None;
        let mut description_column = None;
        let mut amount_column = None;
        let mut category_column = None;

        for (idx, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "id" => id_column = Some(idx),
                "date" => date_column = Some(idx),
                "description" | "memo" => description_column = Some(idx),
                "amount" => amount_column = Some(idx),
                "category" => category_column = Some(idx),
                _ => {}
            }
        }

        let missing = |name: &str| KakeiboError::Import(format!("missing '{}' column", name));

        Ok(Self {
            id_column,
            date_column: date_column.ok_or_else(|| missing("date"))?,
            description_column,
            amount_column: amount_column.ok_or_else(|| missing("amount"))?,
            category_column: category_column.ok_or_else(|| missing("category"))?,
        })
    }
}

/// Service for importing transactions
pub struct ImportService<'a> {
    catalog: &'a CategoryCatalog,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self { catalog }
    }

    /// Parse transactions from CSV text
    ///
    /// Fails on the first invalid row, naming its line in the input.
    pub fn parse_reader<R: std::io::Read>(&self, reader: R) -> KakeiboResult<Vec<Transaction>> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mapping = ColumnMapping::from_headers(reader.headers()?)?;

        let mut transactions = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 2);

            let txn = self
                .parse_record(&record, idx, &mapping)
                .map_err(|e| KakeiboError::Import(format!("line {}: {}", line, e)))?;
            transactions.push(txn);
        }

        debug!(count = transactions.len(), "Parsed CSV transactions");
        Ok(transactions)
    }

    /// Parse transactions from a CSV file
    pub fn parse_file(&self, path: &Path) -> KakeiboResult<Vec<Transaction>> {
        let file = File::open(path).map_err(|e| {
            KakeiboError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let transactions = self.parse_reader(file)?;
        info!(path = %path.display(), count = transactions.len(), "Imported transactions");
        Ok(transactions)
    }

    /// Build a store from a CSV file
    pub fn load_store(&self, path: &Path) -> KakeiboResult<TransactionStore> {
        let transactions = self.parse_file(path)?;
        TransactionStore::with_transactions(self.catalog.clone(), transactions)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        row_index: usize,
        mapping: &ColumnMapping,
    ) -> KakeiboResult<Transaction> {
        let field = |col: usize| record.get(col).unwrap_or("");

        let input = NewTransaction::parse(
            field(mapping.amount_column),
            field(mapping.category_column),
        )?;
        self.catalog.require(&input.category)?;

        let id = mapping
            .id_column
            .map(field)
            .filter(|id| !id.is_empty())
            .map(TransactionId::new)
            .unwrap_or_else(|| TransactionId::new((row_index + 1).to_string()));

        let description = mapping
            .description_column
            .map(field)
            .unwrap_or_default();

        Ok(Transaction::new(
            id,
            field(mapping.date_column),
            description,
            input.amount,
            input.category,
        ))
    }
}
