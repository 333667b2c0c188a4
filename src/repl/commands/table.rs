//! # Table and Pager Commands
//!
//! Row movement, opening the edit modal, and page navigation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::{Focus, Step};

fn in_table(context: &CommandContext, event: &KeyEvent) -> bool {
    context.focus() == Focus::Table && event.modifiers.is_empty()
}

/// Move the highlight (j/k or arrow keys)
pub struct MoveRowCommand;

impl MoveRowCommand {
    fn step(event: &KeyEvent) -> Option<Step> {
        match event.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Step::Forward),
            KeyCode::Char('k') | KeyCode::Up => Some(Step::Backward),
            _ => None,
        }
    }
}

impl Command for MoveRowCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_table(context, event) && Self::step(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::step(&event)
            .map(|step| vec![CommandEvent::RowMoveRequested { step }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "MoveRow"
    }
}

/// Open the highlighted record in the edit modal (Enter)
pub struct OpenEditCommand;

impl Command for OpenEditCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_table(context, event) && matches!(event.code, KeyCode::Enter)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.row_count == 0 {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![CommandEvent::OpenEditRequested])
    }

    fn name(&self) -> &'static str {
        "OpenEdit"
    }
}

/// Next / previous page (l, n, Right / h, p, Left)
pub struct PageStepCommand;

impl PageStepCommand {
    fn step(event: &KeyEvent) -> Option<Step> {
        match event.code {
            KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Step::Forward),
            KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Left => Some(Step::Backward),
            _ => None,
        }
    }
}

impl Command for PageStepCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_table(context, event) && Self::step(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::step(&event)
            .map(|step| vec![CommandEvent::PageStepRequested { step }])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "PageStep"
    }
}

/// Cycle through the page size options (s)
pub struct CyclePageSizeCommand;

impl Command for CyclePageSizeCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_table(context, event) && matches!(event.code, KeyCode::Char('s'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::PageSizeCycleRequested])
    }

    fn name(&self) -> &'static str {
        "CyclePageSize"
    }
}

/// Reload the current page (r)
pub struct ReloadPageCommand;

impl Command for ReloadPageCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        in_table(context, event) && matches!(event.code, KeyCode::Char('r'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ReloadRequested])
    }

    fn name(&self) -> &'static str {
        "ReloadPage"
    }
}
