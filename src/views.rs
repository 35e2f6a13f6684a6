//! Derived views: pure functions over the current record collection. Nothing
//! computed here is stored back anywhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format;
use crate::ledger::{Category, ExpenseRecord};

/// One point of the expense trend chart, in collection order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub amount: f64,
}

/// Sum of all amounts; 0 for an empty collection.
pub fn total(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// One `(label, amount)` point per record, labelled with the short date.
pub fn chart_series(records: &[ExpenseRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|record| ChartPoint {
            label: format::format_short_date(record.date),
            amount: record.amount,
        })
        .collect()
}

/// Per-category amount sums. Categories with no records are absent.
pub fn category_totals(records: &[ExpenseRecord]) -> BTreeMap<Category, f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.category).or_insert(0.0) += record.amount;
    }
    totals
}
