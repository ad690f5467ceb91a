//! Storage layer for LedgerLite
//!
//! A single flat-file backed transaction store.

pub mod ledger;

pub use ledger::Ledger;
