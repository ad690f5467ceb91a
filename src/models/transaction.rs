//! Transaction model
//!
//! One ledger entry: a store-assigned id, free-form date and category labels,
//! a description, and a signed amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ledger entry
///
/// The date is free-form text, conventionally `YYYY-MM-DD`; it is stored and
/// compared exactly as entered, never parsed as a calendar date. The sign of
/// the amount is a convention: non-negative for income, negative for expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned identifier, unique for the lifetime of the ledger
    pub id: u32,

    /// Transaction date, conventionally `YYYY-MM-DD`
    pub date: String,

    /// Category label, e.g. Food, Travel, Salary
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Signed amount (non-negative for income, negative for expenses)
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: u32,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }

    /// Check if this is income (non-negative amount)
    pub fn is_income(&self) -> bool {
        self.amount >= 0.0
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Check whether this record matches a search keyword
    ///
    /// A record matches when its category or date equals the keyword exactly,
    /// or its description contains the keyword as a case-sensitive substring.
    pub fn matches(&self, keyword: &str) -> bool {
        self.category == keyword || self.date == keyword || self.description.contains(keyword)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.date, self.category, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(1, "2025-08-13", "Salary", "Opening balance", 1000.0);
        assert_eq!(txn.id, 1);
        assert_eq!(txn.date, "2025-08-13");
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.amount, 1000.0);
    }

    #[test]
    fn test_income_expense() {
        let income = Transaction::new(1, "2025-08-13", "Salary", "", 1000.0);
        assert!(income.is_income());
        assert!(!income.is_expense());

        let expense = Transaction::new(2, "2025-08-14", "Food", "", -12.5);
        assert!(!expense.is_income());
        assert!(expense.is_expense());

        // Zero counts as income by the sign convention
        let zero = Transaction::new(3, "2025-08-15", "Misc", "", 0.0);
        assert!(zero.is_income());
    }

    #[test]
    fn test_matches_exact_category_and_date() {
        let txn = Transaction::new(1, "2025-08-14", "Food", "Lunch at cafe", -12.5);

        assert!(txn.matches("Food"));
        assert!(txn.matches("2025-08-14"));

        // Category and date match only exactly
        assert!(!txn.matches("Foo"));
        assert!(!txn.matches("2025-08"));
    }

    #[test]
    fn test_matches_description_substring() {
        let txn = Transaction::new(1, "2025-08-14", "Food", "Lunch at cafe", -12.5);

        assert!(txn.matches("Lunch"));
        assert!(txn.matches("at caf"));
        assert!(!txn.matches("lunch")); // case-sensitive
        assert!(!txn.matches("dinner"));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(1, "2025-08-14", "Food", "Lunch", -12.5);
        assert_eq!(format!("{}", txn), "2025-08-14 Food -12.50");
    }
}
