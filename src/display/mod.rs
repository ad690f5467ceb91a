//! Display formatting for terminal output
//!
//! Free functions that render ledger data as fixed-width text. Nothing here
//! prints; callers decide where the strings go.

pub mod report;
pub mod transaction;

pub use report::{format_balance_summary, format_category_report};
pub use transaction::{format_search_results, format_transaction_table};
