//! # Command Context
//!
//! Read-only view of the application state handed to commands.

use crate::repl::events::Focus;
use crate::repl::view_models::ProductListViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone)]
pub struct ViewModelSnapshot {
    pub focus: Focus,
    /// Rows on the current page
    pub row_count: usize,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ProductListViewModel) -> Self {
        Self {
            focus: view_model.focus(),
            row_count: view_model.records().len(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }
}
