//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

use crate::repl::events::Step;

/// Events that commands can produce to request changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// Move the row highlight
    RowMoveRequested { step: Step },

    /// Open the edit modal for the highlighted row
    OpenEditRequested,

    /// Move to the next or previous page
    PageStepRequested { step: Step },

    /// Switch to the next page size option
    PageSizeCycleRequested,

    /// Fetch the current page again
    ReloadRequested,

    /// Type a character into the focused form field
    FormCharRequested { ch: char },

    /// Delete the last character of the focused form field
    FormBackspaceRequested,

    /// Move focus to another form field
    FormFocusRequested { step: Step },

    /// Validate and apply the edit
    SubmitEditRequested,

    /// Close the modal without applying
    CancelEditRequested,

    /// Request to quit application
    QuitRequested,

    /// No action needed (for commands that only query state)
    NoAction,
}
