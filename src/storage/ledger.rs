//! Ledger store and flat-file persistence
//!
//! Holds the authoritative in-memory list of transactions and keeps a flat
//! comma-delimited text file synchronized with it. The file is read in full
//! when the ledger is opened and rewritten in full after every mutation.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// In-memory transaction store backed by a flat text file
///
/// One record per line, `id,date,category,description,amount`, no header and
/// no quoting. Records read back faithfully only when no field contains the
/// delimiter; a comma inside a field corrupts field alignment on reload.
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
    next_id: u32,
}

impl Ledger {
    /// Open a ledger backed by the given file
    ///
    /// A missing file yields an empty ledger, not an error. The next id is
    /// derived as one past the highest id on file, or 1 for an empty store.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let mut ledger = Self {
            path: path.into(),
            transactions: Vec::new(),
            next_id: 1,
        };
        ledger.load()?;
        Ok(ledger)
    }

    /// Read the backing file into the store
    ///
    /// Reading stops at the first line that does not parse as a record;
    /// records before it are kept, the rest are silently dropped.
    fn load(&mut self) -> LedgerResult<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(LedgerError::Storage(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line.map_err(|e| {
                LedgerError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

            let Some(txn) = parse_record(&line) else {
                break;
            };

            if txn.id >= self.next_id {
                self.next_id = txn.id + 1;
            }
            self.transactions.push(txn);
        }

        Ok(())
    }

    /// Rewrite the backing file from the in-memory store
    ///
    /// Amounts are written as plain decimals with no fixed precision; the
    /// two-decimal rendering exists only on screen. On a write failure the
    /// in-memory store keeps its state, so store and file can diverge until
    /// the next successful save.
    pub fn save(&self) -> LedgerResult<()> {
        let file = File::create(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        for txn in &self.transactions {
            writeln!(writer, "{}", format_record(txn)).map_err(|e| {
                LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        }

        writer.flush().map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }

    /// Append a new transaction and persist the store
    ///
    /// The id is assigned by the store and is strictly greater than every id
    /// ever assigned in this ledger's lifetime, including deleted ones. The
    /// record stays in memory even when the save fails.
    pub fn add(
        &mut self,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> LedgerResult<Transaction> {
        let txn = Transaction::new(self.next_id, date, category, description, amount);
        self.next_id += 1;
        self.transactions.push(txn.clone());
        self.save()?;
        Ok(txn)
    }

    /// Remove the first transaction with the given id and persist the store
    ///
    /// An unknown id leaves the store untouched and skips the save.
    pub fn delete(&mut self, id: u32) -> LedgerResult<Transaction> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::NotFound { id })?;

        let txn = self.transactions.remove(pos);
        self.save()?;
        Ok(txn)
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions matching the keyword, in store order
    ///
    /// A record matches when its category or date equals the keyword exactly,
    /// or its description contains the keyword as a substring.
    pub fn search(&self, keyword: &str) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.matches(keyword)).collect()
    }

    /// Number of transactions in the store
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse one `id,date,category,description,amount` line
///
/// Fields are positional with no quoting. Each field is consumed up to the
/// next comma, so an embedded comma shifts the remainder into the amount
/// field and the parse fails.
fn parse_record(line: &str) -> Option<Transaction> {
    let mut fields = line.splitn(5, ',');
    let id = fields.next()?.trim().parse().ok()?;
    let date = fields.next()?.to_string();
    let category = fields.next()?.to_string();
    let description = fields.next()?.to_string();
    let amount = fields.next()?.trim().parse().ok()?;

    Some(Transaction {
        id,
        date,
        category,
        description,
        amount,
    })
}

/// Render one record as a flat-file line
///
/// The amount keeps Rust's default float rendering (no fixed precision).
fn format_record(txn: &Transaction) -> String {
    format!(
        "{},{},{},{},{}",
        txn.id, txn.date, txn.category, txn.description, txn.amount
    )
}
