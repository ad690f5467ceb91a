//! CSV export
//!
//! Writes the ledger as properly quoted CSV with a header row. The flat
//! persistence file has no quoting, so this is the interchange-safe way to
//! get data out of a ledger whose fields may contain commas.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Export transactions as quoted CSV with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> LedgerResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for txn in transactions {
        wtr.serialize(txn)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    wtr.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
