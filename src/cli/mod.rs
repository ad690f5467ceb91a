//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger store and the display layer. The `menu`
//! module holds the interactive numbered-menu front end.

pub mod export;
pub mod menu;
pub mod report;
pub mod transaction;

pub use export::handle_export;
pub use menu::run_menu;
pub use report::{handle_report, handle_summary};
pub use transaction::{handle_add, handle_delete, handle_list, handle_search, AddArgs};
