//! Tracker session: the explicitly owned state object a rendering surface is
//! constructed with. Holds the ledger, the in-progress draft, and the editor
//! modal flag, and exposes the user-event surface as methods.

use uuid::Uuid;

use crate::errors::DraftError;
use crate::ledger::{DraftField, ExpenseDraft, Ledger};
use crate::time::{Clock, SystemClock};
use crate::views::{self, ChartPoint};

pub struct TrackerSession<C: Clock = SystemClock> {
    ledger: Ledger,
    draft: ExpenseDraft,
    modal_open: bool,
    clock: C,
}

impl TrackerSession<SystemClock> {
    pub fn new(ledger: Ledger) -> Self {
        Self::with_clock(ledger, SystemClock)
    }
}

impl<C: Clock> TrackerSession<C> {
    pub fn with_clock(ledger: Ledger, clock: C) -> Self {
        let draft = ExpenseDraft::new(clock.today());
        Self {
            ledger,
            draft,
            modal_open: false,
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_editor(&mut self) {
        self.modal_open = true;
    }

    /// Closes the editor and discards the in-progress draft. No ledger side
    /// effect.
    pub fn cancel_editor(&mut self) {
        self.draft.reset(self.clock.today());
        self.modal_open = false;
    }

    pub fn update_draft(&mut self, field: DraftField) {
        self.draft.update(field);
    }

    /// Commits the draft into the ledger and closes the editor. A rejected
    /// commit leaves ledger, draft, and modal state untouched.
    pub fn submit(&mut self) -> Result<Uuid, DraftError> {
        let record = self.draft.commit(self.clock.today())?;
        let id = self.ledger.add(record);
        self.modal_open = false;
        tracing::debug!(%id, "expense committed");
        Ok(id)
    }

    pub fn delete(&mut self, id: Uuid) {
        if self.ledger.remove(id) {
            tracing::debug!(%id, "expense removed");
        }
    }

    pub fn total(&self) -> f64 {
        views::total(self.ledger.records())
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        views::chart_series(self.ledger.records())
    }
}

impl Default for TrackerSession<SystemClock> {
    fn default() -> Self {
        Self::new(Ledger::new())
    }
}
