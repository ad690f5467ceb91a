//! Report display formatting

use crate::reports::{BalanceSummary, CategoryReport};

/// Format the income/expense/net balance summary
pub fn format_balance_summary(summary: &BalanceSummary) -> String {
    let mut output = String::new();

    output.push_str("=== Analytics Summary ===\n");
    output.push_str(&format!("Total Income : {:.2}\n", summary.income));
    output.push_str(&format!("Total Expense: {:.2}\n", summary.expense));
    output.push_str(&format!("Net Balance  : {:.2}\n", summary.net()));
    output.push_str("=========================\n");

    output
}

/// Format the per-category report
///
/// Categories are listed in lexicographic order with their final totals; the
/// highest line shows the streaming tracker's captured pair.
pub fn format_category_report(report: &CategoryReport) -> String {
    let mut output = String::new();

    output.push_str("===== Advanced Analytics =====\n");
    output.push_str(&format!("Total spent: {:.2}\n", report.total));

    if let Some((category, value)) = &report.highest {
        output.push_str(&format!(
            "Highest spending category: {} ({:.2})\n",
            category, value
        ));
    }

    output.push_str("Spending by category:\n");
    for (category, total) in &report.totals {
        output.push_str(&format!(" - {}: {:.2}\n", category, total));
    }
    output.push_str("==============================\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    #[test]
    fn test_format_balance_summary() {
        let transactions = vec![
            Transaction::new(1, "2025-08-13", "Salary", "Opening balance", 1000.0),
            Transaction::new(2, "2025-08-14", "Food", "Lunch", -12.5),
        ];
        let summary = BalanceSummary::generate(&transactions);

        let formatted = format_balance_summary(&summary);
        assert!(formatted.contains("Total Income : 1000.00"));
        assert!(formatted.contains("Total Expense: -12.50"));
        assert!(formatted.contains("Net Balance  : 987.50"));
    }

    #[test]
    fn test_format_category_report() {
        let transactions = vec![
            Transaction::new(1, "2025-08-13", "Salary", "", 1000.0),
            Transaction::new(2, "2025-08-14", "Food", "", -10.0),
            Transaction::new(3, "2025-08-15", "Food", "", -5.0),
        ];
        let report = CategoryReport::generate(&transactions);

        let formatted = format_category_report(&report);
        assert!(formatted.contains("Total spent: 985.00"));
        assert!(formatted.contains("Highest spending category: Salary (1000.00)"));
        assert!(formatted.contains(" - Food: -15.00"));
        assert!(formatted.contains(" - Salary: 1000.00"));
    }

    #[test]
    fn test_highest_line_omitted_when_no_leader() {
        let transactions = vec![Transaction::new(1, "2025-08-14", "Food", "", -10.0)];
        let report = CategoryReport::generate(&transactions);

        let formatted = format_category_report(&report);
        assert!(!formatted.contains("Highest spending category"));
    }
}
