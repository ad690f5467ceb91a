//! Export functionality
//!
//! Quoted CSV export of the ledger for interchange with other tools.

pub mod csv;

pub use csv::export_transactions_csv;
