use thiserror::Error;

/// Error type for draft commit failures, the only fallible operation in the
/// crate. Ledger mutations themselves never fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Amount is not a valid non-negative number: {0:?}")]
    InvalidAmount(String),
}
