//! Balance summary
//!
//! Income/expense/net aggregate over all records, computed in a single pass.

use crate::models::Transaction;

/// Income, expense, and net balance totals
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceSummary {
    /// Sum of all non-negative amounts
    pub income: f64,

    /// Sum of all negative amounts (stays negative)
    pub expense: f64,
}

impl BalanceSummary {
    /// Compute the summary over a set of records
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();

        for txn in transactions {
            if txn.is_income() {
                summary.income += txn.amount;
            } else {
                summary.expense += txn.amount;
            }
        }

        summary
    }

    /// Net balance: income plus the (negative) expense total
    pub fn net(&self) -> f64 {
        self.income + self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_all_zero() {
        let summary = BalanceSummary::generate(&[]);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.expense, 0.0);
        assert_eq!(summary.net(), 0.0);
    }

    #[test]
    fn test_income_expense_and_net() {
        let transactions = vec![
            Transaction::new(1, "2025-08-13", "Salary", "Opening balance", 1000.0),
            Transaction::new(2, "2025-08-14", "Food", "Lunch", -12.5),
        ];

        let summary = BalanceSummary::generate(&transactions);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.expense, -12.5);
        assert_eq!(summary.net(), 987.5);
    }

    #[test]
    fn test_net_is_income_plus_expense() {
        let transactions = vec![
            Transaction::new(1, "2025-08-13", "A", "", 10.0),
            Transaction::new(2, "2025-08-13", "B", "", -4.0),
            Transaction::new(3, "2025-08-13", "C", "", 0.0),
            Transaction::new(4, "2025-08-13", "D", "", -6.0),
        ];

        let summary = BalanceSummary::generate(&transactions);
        assert_eq!(summary.net(), summary.income + summary.expense);
        assert_eq!(summary.income, 10.0);
        assert_eq!(summary.expense, -10.0);
    }
}
