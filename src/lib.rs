//! LedgerLite - personal finance ledger for the terminal
//!
//! This library provides the core functionality for the LedgerLite
//! application: an in-memory transaction store backed by a flat text file,
//! with search and aggregate reporting on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The transaction record
//! - `storage`: Flat-file ledger store
//! - `reports`: Balance and per-category aggregates
//! - `display`: Terminal table formatting
//! - `export`: Quoted CSV export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerlite::storage::Ledger;
//!
//! let mut ledger = Ledger::open("transactions.csv")?;
//! ledger.add("2025-08-13", "Salary", "Opening balance", 1000.0)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::LedgerError;
