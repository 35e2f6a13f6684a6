use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One committed ledger entry. Never mutated after commit; edits are
/// expressed as delete plus re-commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Category,
}

impl ExpenseRecord {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date,
            category,
        }
    }
}

/// Fixed set of spending categories; no free text.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Category {
    #[default]
    Food,
    Utilities,
    Entertainment,
    Transport,
    Shopping,
    Other,
}

impl Category {
    /// Every category, in the order selection surfaces present them.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Utilities,
        Category::Entertainment,
        Category::Transport,
        Category::Shopping,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
