#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the in-memory ledger, draft entry, and derived view
//! primitives that power a personal finance tracker surface.

pub mod errors;
pub mod format;
pub mod ledger;
pub mod session;
pub mod time;
pub mod utils;
pub mod views;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
