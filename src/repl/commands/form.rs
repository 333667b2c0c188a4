//! # Edit Form Commands
//!
//! Typing, field navigation, submit and cancel inside the edit modal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::{Focus, Step};

fn in_modal(context: &CommandContext) -> bool {
    context.focus() == Focus::EditModal
}

/// Submit the form (Enter)
pub struct SubmitEditCommand;

impl Command for SubmitEditCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_modal(context) && matches!(event.code, KeyCode::Enter)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SubmitEditRequested])
    }

    fn name(&self) -> &'static str {
        "SubmitEdit"
    }
}

/// Close the modal without saving (Esc)
pub struct CancelEditCommand;

impl Command for CancelEditCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_modal(context) && matches!(event.code, KeyCode::Esc)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CancelEditRequested])
    }

    fn name(&self) -> &'static str {
        "CancelEdit"
    }
}

/// Move between fields (Tab/Down forward, Shift+Tab/Up backward)
pub struct FormFocusCommand;

impl FormFocusCommand {
    fn step(event: &KeyEvent) -> Option<Step> {
        match event.code {
            KeyCode::Tab | KeyCode::Down => Some(Step::Forward),
            KeyCode::BackTab | KeyCode::Up => Some(Step::Backward),
            _ => None,
        }
    }
}

impl Command for FormFocusCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_modal(context) && Self::step(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::step(&event)
            .map(|step| vec![CommandEvent::FormFocusRequested { step }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "FormFocus"
    }
}

/// Delete the last character of the focused field (Backspace)
pub struct FormBackspaceCommand;

impl Command for FormBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_modal(context) && matches!(event.code, KeyCode::Backspace)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FormBackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "FormBackspace"
    }
}

/// Type a printable character into the focused field
pub struct FormInputCommand;

impl Command for FormInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_modal(context)
            && matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::FormCharRequested { ch }]),
            _ => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "FormInput"
    }
}
