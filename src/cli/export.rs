//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};
use crate::export::export_transactions_csv;
use crate::storage::Ledger;

/// Handle the export command
///
/// Writes quoted CSV to the given file, or to stdout when no path is given.
pub fn handle_export(ledger: &Ledger, output: Option<&Path>) -> LedgerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export_transactions_csv(ledger.transactions(), BufWriter::new(file))?;
            println!("Exported {} transactions to {}", ledger.len(), path.display());
        }
        None => {
            export_transactions_csv(ledger.transactions(), io::stdout().lock())?;
        }
    }

    Ok(())
}
