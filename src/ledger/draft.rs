use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DraftError;

use super::expense::{Category, ExpenseRecord};

/// One field edit against the draft. Amount stays raw text until commit so
/// the editor can hold partially typed input.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Description(String),
    Amount(String),
    Date(NaiveDate),
    Category(Category),
}

/// The single staging record composed in the editor before commit. Invisible
/// to the ledger until `commit` succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub category: Category,
}

impl ExpenseDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            date: today,
            category: Category::Food,
        }
    }

    /// Replaces one field's value. No cross-field validation happens here.
    pub fn update(&mut self, field: DraftField) {
        match field {
            DraftField::Description(value) => self.description = value,
            DraftField::Amount(value) => self.amount = value,
            DraftField::Date(value) => self.date = value,
            DraftField::Category(value) => self.category = value,
        }
    }

    /// Restores defaults: empty description and amount, date set to today,
    /// category back to Food.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Builds a committed record from the draft.
    ///
    /// Rejects without touching the draft when the trimmed description is
    /// empty or the amount does not parse as a finite non-negative number.
    /// On success the draft resets and the fresh record is returned.
    pub fn commit(&mut self, today: NaiveDate) -> Result<ExpenseRecord, DraftError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidAmount(self.amount.clone()))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(DraftError::InvalidAmount(self.amount.clone()));
        }

        let record = ExpenseRecord::new(description, amount, self.date, self.category);
        self.reset(today);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn filled_draft() -> ExpenseDraft {
        let mut draft = ExpenseDraft::new(today());
        draft.update(DraftField::Description("Coffee".into()));
        draft.update(DraftField::Amount("42.50".into()));
        draft.update(DraftField::Category(Category::Shopping));
        draft
    }

    #[test]
    fn new_draft_starts_at_defaults() {
        let draft = ExpenseDraft::new(today());
        assert_eq!(draft.description, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.date, today());
        assert_eq!(draft.category, Category::Food);
    }

    #[test]
    fn commit_parses_amount_into_a_number() {
        let mut draft = filled_draft();
        let record = draft.commit(today()).unwrap();
        assert_eq!(record.description, "Coffee");
        assert_eq!(record.amount, 42.5);
        assert_eq!(record.category, Category::Shopping);
    }

    #[test]
    fn commit_resets_the_draft() {
        let mut draft = filled_draft();
        draft.update(DraftField::Date(
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ));
        draft.commit(today()).unwrap();
        assert_eq!(draft, ExpenseDraft::new(today()));
    }

    #[test]
    fn commit_rejects_empty_description() {
        let mut draft = filled_draft();
        draft.update(DraftField::Description("   ".into()));
        let before = draft.clone();

        assert_eq!(draft.commit(today()), Err(DraftError::EmptyDescription));
        assert_eq!(draft, before);
    }

    #[test]
    fn commit_rejects_unparsable_amount() {
        let mut draft = filled_draft();
        draft.update(DraftField::Amount("lots".into()));

        assert_eq!(
            draft.commit(today()),
            Err(DraftError::InvalidAmount("lots".into()))
        );
    }

    #[test]
    fn commit_rejects_negative_amount() {
        let mut draft = filled_draft();
        draft.update(DraftField::Amount("-3".into()));

        assert!(matches!(
            draft.commit(today()),
            Err(DraftError::InvalidAmount(_))
        ));
    }

    #[test]
    fn commit_rejects_non_finite_amount() {
        let mut draft = filled_draft();
        draft.update(DraftField::Amount("inf".into()));

        assert!(matches!(
            draft.commit(today()),
            Err(DraftError::InvalidAmount(_))
        ));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = filled_draft();
        draft.reset(today());
        assert_eq!(draft, ExpenseDraft::new(today()));
    }
}
