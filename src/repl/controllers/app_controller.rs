//! # Application Controller
//!
//! Owns the event loop. Key events go through the command registry, the
//! resulting command events are applied to the view model, fetch tickets
//! are handed to the catalog service, and completed fetches are fed back
//! into the view model. View events drive selective redraws.

use crate::config::AppSettings;
use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::{Step, ViewEvent},
    io::{EventStream, RenderStream},
    models::FetchTicket,
    services::{CatalogService, FetchOutcome},
    view_models::{EditError, FetchDisposition, ProductListViewModel},
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// How long one loop iteration waits for input
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ProductListViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    catalog: CatalogService,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams and catalog service
    pub fn with_io_streams(
        settings: AppSettings,
        event_stream: ES,
        render_stream: RS,
        catalog: CatalogService,
    ) -> Result<Self> {
        let mut view_model = ProductListViewModel::from_profile(&settings.catalog);
        tracing::debug!(
            "Using profile '{}' from {}",
            settings.profile_name,
            settings.profile_path
        );
        view_model.set_profile_info(settings.profile_name);

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        // Nothing is on screen yet
        view_model.collect_pending_view_events();

        tracing::debug!(
            "Controller ready: {} (page size {})",
            catalog.client().products_url(),
            view_model.requested_page().size
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            catalog,
            event_stream,
            should_quit: false,
        })
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.load_first_page();
        self.redraw()?;

        while !self.should_quit {
            self.drain_fetch_outcomes()?;

            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                        self.handle_key_event(key_event)?;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height)?;
                    }
                    _ => {}
                }
            }

            // Let fetch tasks progress on single-threaded runtimes
            tokio::task::yield_now().await;
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    /// Repaint every region of the screen
    pub fn redraw(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.view_model)
    }

    /// Request page 1 and start fetching it
    pub fn load_first_page(&mut self) -> FetchTicket {
        let ticket = self.view_model.initialize();
        self.catalog.dispatch(ticket);
        ticket
    }

    /// Apply every fetch that has completed so far
    pub fn drain_fetch_outcomes(&mut self) -> Result<usize> {
        let mut applied = 0;
        while let Some(outcome) = self.catalog.poll_outcome() {
            self.apply_fetch_outcome(outcome)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Wait for the next completed fetch and apply it
    pub async fn wait_for_fetch(&mut self) -> Result<Option<FetchDisposition>> {
        match self.catalog.next_outcome().await {
            Some(outcome) => self.apply_fetch_outcome(outcome).map(Some),
            None => Ok(None),
        }
    }

    /// Feed one completed fetch to the view model and redraw what changed
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) -> Result<FetchDisposition> {
        let disposition = self.view_model.apply_fetch_outcome(outcome);
        self.render_pending()?;
        Ok(disposition)
    }

    /// Route one key through the command registry and apply the result
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;
        if events.is_empty() {
            return Ok(());
        }
        tracing::debug!("Command events generated: {:?}", events);

        for event in events {
            self.apply_command_event(event)?;
        }

        if !self.should_quit {
            self.render_pending()?;
        }
        Ok(())
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.view_renderer.update_size(width, height);
        self.view_model.update_terminal_size(width, height);
        self.render_pending()
    }

    fn dispatch(&mut self, ticket: Option<FetchTicket>) {
        match ticket {
            Some(ticket) => self.catalog.dispatch(ticket),
            None => tracing::debug!("No page to move to"),
        }
    }

    fn apply_command_event(&mut self, event: CommandEvent) -> Result<()> {
        match event {
            CommandEvent::RowMoveRequested { step } => {
                self.view_model.move_selection(step);
            }
            CommandEvent::OpenEditRequested => {
                if !self.view_model.open_selected() {
                    tracing::debug!("Nothing selected to edit");
                }
            }
            CommandEvent::PageStepRequested { step } => {
                let ticket = match step {
                    Step::Forward => self.view_model.next_page(),
                    Step::Backward => self.view_model.previous_page(),
                };
                self.dispatch(ticket);
            }
            CommandEvent::PageSizeCycleRequested => {
                let ticket = self.view_model.cycle_page_size();
                self.dispatch(ticket);
            }
            CommandEvent::ReloadRequested => {
                let ticket = self.view_model.reload();
                self.dispatch(Some(ticket));
            }
            CommandEvent::FormCharRequested { ch } => {
                self.view_model.form_insert_char(ch);
            }
            CommandEvent::FormBackspaceRequested => {
                self.view_model.form_backspace();
            }
            CommandEvent::FormFocusRequested { step } => {
                self.view_model.form_move_focus(step);
            }
            CommandEvent::SubmitEditRequested => match self.view_model.submit_edit() {
                Ok(edit) => tracing::info!("Product {} saved as '{}'", edit.id, edit.title),
                Err(EditError::Invalid(errors)) => {
                    tracing::debug!("Submit rejected: {errors}");
                }
                Err(EditError::NotEditing) => {
                    tracing::warn!("Submit requested with no open edit");
                }
            },
            CommandEvent::CancelEditRequested => {
                self.view_model.cancel_edit();
            }
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
        Ok(())
    }

    fn render_pending(&mut self) -> Result<()> {
        let events = self.view_model.collect_pending_view_events();
        self.process_view_events(&events)
    }

    /// Redraw only the regions the view events name
    fn process_view_events(&mut self, view_events: &[ViewEvent]) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        let needs = |event: ViewEvent| view_events.contains(&event);
        let modal_open = self.view_model.is_modal_open();

        // The modal overlaps the table, so table changes under it need a full pass
        let full = needs(ViewEvent::FullRedrawRequired)
            || (modal_open
                && (needs(ViewEvent::TableRedrawRequired)
                    || needs(ViewEvent::PagerUpdateRequired)));
        if full {
            return self.view_renderer.render_full(&self.view_model);
        }

        if needs(ViewEvent::TableRedrawRequired) {
            self.view_renderer.render_table(&self.view_model)?;
        }
        if needs(ViewEvent::PagerUpdateRequired) {
            self.view_renderer.render_pager(&self.view_model)?;
        }
        // Key hints in the status bar depend on whether the modal is open
        if needs(ViewEvent::StatusBarUpdateRequired) || needs(ViewEvent::ModalRedrawRequired) {
            self.view_renderer.render_status_bar(&self.view_model)?;
        }
        if needs(ViewEvent::ModalRedrawRequired) {
            self.view_renderer.render_modal(&self.view_model)?;
        }
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ProductListViewModel {
        &self.view_model
    }

    /// Get mutable reference to view model (for testing)
    pub fn view_model_mut(&mut self) -> &mut ProductListViewModel {
        &mut self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
