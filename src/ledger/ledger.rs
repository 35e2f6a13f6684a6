use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense::{Category, ExpenseRecord};

/// Authoritative, insertion-ordered collection of committed expense records.
///
/// Owned by whichever surface renders it and passed in explicitly; the crate
/// keeps no global instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps pre-existing records, preserving their order.
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// The three seed entries the tracker starts with.
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        Self::with_records(vec![
            ExpenseRecord::new("Groceries", 150.0, date(2024, 2, 15), Category::Food),
            ExpenseRecord::new("Internet Bill", 60.0, date(2024, 2, 14), Category::Utilities),
            ExpenseRecord::new(
                "Movie Night",
                30.0,
                date(2024, 2, 13),
                Category::Entertainment,
            ),
        ])
    }

    /// Appends a committed record and returns its id.
    pub fn add(&mut self, record: ExpenseRecord) -> Uuid {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Removes the record with the given id. Absent ids are a silent no-op;
    /// the return value reports whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        self.records.len() < before
    }

    /// Read-only view of the collection in insertion order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn record(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
