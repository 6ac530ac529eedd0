//! Transaction model
//!
//! A transaction is an outflow against one category. Dates are opaque
//! display labels such as "11/5"; the engine never parses them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use crate::error::{KakeiboError, KakeiboResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Display date ("M/D")
    pub date: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Category this expense belongs to
    pub category: CategoryId,
}

impl Transaction {
    pub fn new(
        id: impl Into<TransactionId>,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Validate the fields the engine relies on
    pub fn validate(&self) -> KakeiboResult<()> {
        if !self.amount.is_positive() {
            return Err(KakeiboError::invalid_input(format!(
                "amount must be positive, got {}",
                self.amount.units()
            )));
        }

        if self.category.as_str().trim().is_empty() {
            return Err(KakeiboError::invalid_input("a category must be selected"));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// Quick-entry input after validation: a positive amount and a category id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: CategoryId,
}

impl NewTransaction {
    /// Validate raw quick-entry values
    ///
    /// The amount must be finite and positive, and still at least one whole
    /// unit once rounded. The category must be non-empty.
    pub fn validate(amount: f64, category: &str) -> KakeiboResult<Self> {
        if !amount.is_finite() {
            return Err(KakeiboError::invalid_input("amount must be a number"));
        }
        if amount <= 0.0 {
            return Err(KakeiboError::invalid_input(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let money = Money::from_rounded(amount).ok_or_else(|| {
            KakeiboError::invalid_input(format!("amount {} is too large", amount))
        })?;
        if !money.is_positive() {
            return Err(KakeiboError::invalid_input("amount must be at least 1"));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(KakeiboError::invalid_input("a category must be selected"));
        }

        Ok(Self {
            amount: money,
            category: CategoryId::new(category),
        })
    }

    /// Validate quick-entry values typed as text
    pub fn parse(amount: &str, category: &str) -> KakeiboResult<Self> {
        if amount.trim().is_empty() {
            return Err(KakeiboError::invalid_input("an amount must be entered"));
        }

        let money = Money::parse(amount)
            .map_err(|_| KakeiboError::invalid_input(format!("'{}' is not a valid amount", amount.trim())))?;

        Self::validate(money.as_f64(), category)
    }
}

/// Format a calendar date the way transaction dates are displayed ("11/5")
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new("1", "11/1", "Supermarket", Money::from_units(3200), "food");
        assert_eq!(txn.id, "1");
        assert_eq!(txn.category, "food");
        assert!(txn.validate().is_ok());
        assert_eq!(txn.to_string(), "11/1 Supermarket ¥3,200 [food]");
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let txn = Transaction::new("1", "11/1", "", Money::zero(), "food");
        assert!(matches!(
            txn.validate(),
            Err(KakeiboError::InvalidTransactionInput(_))
        ));
    }

    #[test]
    fn test_quick_entry_validation() {
        let ok = NewTransaction::validate(1200.0, " cafe ").unwrap();
        assert_eq!(ok.amount, Money::from_units(1200));
        assert_eq!(ok.category, "cafe");

        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY, 0.2] {
            assert!(
                matches!(
                    NewTransaction::validate(bad, "food"),
                    Err(KakeiboError::InvalidTransactionInput(_))
                ),
                "amount {} should be rejected",
                bad
            );
        }

        assert!(NewTransaction::validate(100.0, "  ").is_err());
    }

    #[test]
    fn test_quick_entry_rejects_out_of_range_amount() {
        let err = NewTransaction::validate(1e19, "food").unwrap_err();
        assert!(matches!(err, KakeiboError::InvalidTransactionInput(_)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_quick_entry_parse() {
        let ok = NewTransaction::parse("1,500", "food").unwrap();
        assert_eq!(ok.amount, Money::from_units(1500));

        assert!(NewTransaction::parse("", "food").is_err());
        assert!(NewTransaction::parse("lunch", "food").is_err());
        assert!(NewTransaction::parse("0", "food").is_err());
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(display_date(date), "11/5");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new("7", "11/4", "Taxi", Money::from_units(2800), "transport");
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
