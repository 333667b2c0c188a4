//! # Command Implementations
//!
//! Commands translate key events into [`CommandEvent`]s. Each command
//! decides whether it is relevant for a key in the current context; the
//! registry runs the first relevant one.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod events;
pub mod form;
pub mod table;

pub use app::{AppTerminateCommand, QuitCommand};
pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use form::{
    CancelEditCommand, FormBackspaceCommand, FormFocusCommand, FormInputCommand,
    SubmitEditCommand,
};
pub use table::{
    CyclePageSizeCommand, MoveRowCommand, OpenEditCommand, PageStepCommand, ReloadPageCommand,
};

/// A key binding that produces command events
pub trait Command: Send + Sync {
    /// Check if this command should handle the given key event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events for a relevant key
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands
    fn register_default_commands(&mut self) {
        // Application
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(QuitCommand));

        // Edit modal
        self.add_command(Box::new(SubmitEditCommand));
        self.add_command(Box::new(CancelEditCommand));
        self.add_command(Box::new(FormFocusCommand));
        self.add_command(Box::new(FormBackspaceCommand));
        self.add_command(Box::new(FormInputCommand));

        // Table and pager
        self.add_command(Box::new(MoveRowCommand));
        self.add_command(Box::new(OpenEditCommand));
        self.add_command(Box::new(PageStepCommand));
        self.add_command(Box::new(CyclePageSizeCommand));
        self.add_command(Box::new(ReloadPageCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event through all commands
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        tracing::trace!("No command for key {:?}", event.code);
        Ok(Vec::new())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
