//! Core data model for LedgerLite
//!
//! The ledger has a single entity: the transaction record.

pub mod transaction;

pub use transaction::Transaction;
