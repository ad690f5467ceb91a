//! Per-category report
//!
//! Groups records by category and tracks the category holding the highest
//! running cumulative total while folding records in store order.

use std::collections::BTreeMap;

use crate::models::Transaction;

/// Per-category totals with a streaming "highest category" tracker
///
/// `highest` is captured during the fold: whenever a category's running total
/// exceeds the best value seen so far, the name and the running total at that
/// moment are recorded. Later records can move the final totals without
/// updating the captured pair, so `highest` can disagree with the largest
/// entry in `totals`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryReport {
    /// Final total per category, iterated in lexicographic label order
    pub totals: BTreeMap<String, f64>,

    /// Grand total across all records
    pub total: f64,

    /// Category name and its running total at the moment it last took the lead
    ///
    /// `None` when no running total ever rose above zero.
    pub highest: Option<(String, f64)>,
}

impl CategoryReport {
    /// Compute the report by folding records in store order
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut report = Self::default();

        for txn in transactions {
            let entry = report.totals.entry(txn.category.clone()).or_insert(0.0);
            *entry += txn.amount;
            report.total += txn.amount;

            let best = report.highest.as_ref().map_or(0.0, |(_, value)| *value);
            if *entry > best {
                report.highest = Some((txn.category.clone(), *entry));
            }
        }

        report
    }
}
