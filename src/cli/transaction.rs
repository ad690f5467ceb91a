//! Transaction CLI commands
//!
//! Implements the add, list, search, and delete commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_search_results, format_transaction_table};
use crate::error::LedgerResult;
use crate::storage::Ledger;

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// Category label, e.g. Food, Travel, Salary
    pub category: String,

    /// Free-text description
    pub description: String,

    /// Signed amount: non-negative income, negative expense
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the add command
pub fn handle_add(ledger: &mut Ledger, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let date = args.date.unwrap_or_else(|| today(&settings.date_format));

    let txn = ledger.add(date, args.category, args.description, args.amount)?;
    println!("Added transaction {}: {}", txn.id, txn);
    Ok(())
}

/// Handle the list command
pub fn handle_list(ledger: &Ledger) {
    print!("{}", format_transaction_table(ledger.transactions()));
}

/// Handle the search command
pub fn handle_search(ledger: &Ledger, keyword: &str) {
    print!("{}", format_search_results(&ledger.search(keyword)));
}

/// Handle the delete command
pub fn handle_delete(ledger: &mut Ledger, id: u32) -> LedgerResult<()> {
    let txn = ledger.delete(id)?;
    println!("Deleted transaction {}: {}", txn.id, txn);
    Ok(())
}

/// Today's date rendered with the configured format
pub(crate) fn today(date_format: &str) -> String {
    chrono::Local::now().format(date_format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_uses_configured_format() {
        let iso = today("%Y-%m-%d");
        assert_eq!(iso.len(), 10);
        assert_eq!(iso.matches('-').count(), 2);

        let year = today("%Y");
        assert!(year.parse::<u32>().is_ok());
    }
}
