//! # Row Selection
//!
//! The highlighted table row, which stands in for clicking a title.

use crate::repl::events::{Step, ViewEvent};
use crate::repl::models::ProductRecord;
use crate::repl::view_models::core::ProductListViewModel;

impl ProductListViewModel {
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    pub fn selected_record(&self) -> Option<&ProductRecord> {
        self.records.get(self.selected_row)
    }

    /// Select a row by index, clamped to the rows on screen
    pub fn select_row(&mut self, row: usize) {
        let row = row.min(self.records.len().saturating_sub(1));
        if row != self.selected_row {
            self.selected_row = row;
            self.emit_view_event(ViewEvent::TableRedrawRequired);
        }
    }

    /// Move the selection one row, stopping at the first and last rows
    pub fn move_selection(&mut self, step: Step) {
        let row = match step {
            Step::Forward => self.selected_row.saturating_add(1),
            Step::Backward => self.selected_row.saturating_sub(1),
        };
        self.select_row(row);
    }
}
