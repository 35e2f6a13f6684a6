//! Ledger domain models: committed expense records, the ordered collection
//! that owns them, and the transient draft staged before commit.

pub mod draft;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use draft::{DraftField, ExpenseDraft};
pub use expense::{Category, ExpenseRecord};
pub use ledger::Ledger;
