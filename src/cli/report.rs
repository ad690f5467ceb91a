//! Report CLI commands
//!
//! Implements the summary and report commands.

use crate::display::{format_balance_summary, format_category_report};
use crate::reports::{BalanceSummary, CategoryReport};
use crate::storage::Ledger;

/// Handle the summary command (income/expense/net)
pub fn handle_summary(ledger: &Ledger) {
    let summary = BalanceSummary::generate(ledger.transactions());
    print!("{}", format_balance_summary(&summary));
}

/// Handle the report command (per-category totals)
pub fn handle_report(ledger: &Ledger) {
    let report = CategoryReport::generate(ledger.transactions());
    print!("{}", format_category_report(&report));
}
