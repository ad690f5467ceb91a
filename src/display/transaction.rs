//! Transaction display formatting
//!
//! Fixed-width tabular rendering of transaction records.

use crate::models::Transaction;

const TABLE_WIDTH: usize = 67;

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:<5}{:<12}{:<15}{:<25}{:>10.2}",
        txn.id,
        truncate(&txn.date, 11),
        truncate(&txn.category, 14),
        truncate(&txn.description, 24),
        txn.amount
    )
}

/// Format the table header row
fn format_header() -> String {
    let mut output = format!(
        "{:<5}{:<12}{:<15}{:<25}{:>10}\n",
        "ID", "Date", "Category", "Description", "Amount"
    );
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');
    output
}

/// Format all transactions as a table, in store order
///
/// An empty store produces an explicit message instead of an empty table.
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format_header();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format search results, in store order
///
/// The header appears once, and only when at least one record matched.
pub fn format_search_results(matches: &[&Transaction]) -> String {
    if matches.is_empty() {
        return "No matching transactions found.\n".to_string();
    }

    let mut output = String::from("Matching transactions:\n");
    output.push_str(&format_header());
    for txn in matches {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_transaction_row() {
        let txn = Transaction::new(1, "2025-08-14", "Food", "Lunch at cafe", -12.5);

        let formatted = format_transaction_row(&txn);
        assert!(formatted.starts_with("1"));
        assert!(formatted.contains("2025-08-14"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("Lunch at cafe"));
        assert!(formatted.ends_with("-12.50"));
    }

    #[test]
    fn test_format_empty_table() {
        let formatted = format_transaction_table(&[]);
        assert_eq!(formatted, "No transactions found.\n");
    }

    #[test]
    fn test_format_table_has_one_header() {
        let transactions = vec![
            Transaction::new(1, "2025-08-13", "Salary", "Opening balance", 1000.0),
            Transaction::new(2, "2025-08-14", "Food", "Lunch", -12.5),
        ];

        let formatted = format_transaction_table(&transactions);
        assert_eq!(formatted.matches("ID").count(), 1);
        assert!(formatted.contains("Salary"));
        assert!(formatted.contains("1000.00"));
        assert!(formatted.contains("-12.50"));
    }

    #[test]
    fn test_format_empty_search_results() {
        let formatted = format_search_results(&[]);
        assert_eq!(formatted, "No matching transactions found.\n");
    }

    #[test]
    fn test_format_search_results_header_only_with_matches() {
        let txn = Transaction::new(1, "2025-08-14", "Food", "Lunch", -12.5);
        let formatted = format_search_results(&[&txn]);

        assert!(formatted.starts_with("Matching transactions:\n"));
        assert_eq!(formatted.matches("Category").count(), 1);
        assert!(formatted.contains("Food"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");

        let result = truncate("A very long description here", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }
}
