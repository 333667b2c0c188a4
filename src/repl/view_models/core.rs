//! # Product List ViewModel Core
//!
//! Owns every piece of state of the product screen. The operations live in
//! sibling modules (`paging`, `editing`, `selection`) as further `impl`
//! blocks on [`ProductListViewModel`].

use crate::config::CatalogProfile;
use crate::repl::events::{Focus, ViewEvent};
use crate::repl::models::{EditForm, PageState, ProductRecord, StatusLine};

/// The central view model of the product screen
pub struct ProductListViewModel {
    // Pagination and the rows of the last accepted fetch
    pub(super) page_state: PageState,
    pub(super) records: Vec<ProductRecord>,
    pub(super) selected_row: usize,

    // Open edit session, if any
    pub(super) edit_form: Option<EditForm>,

    pub(super) status_line: StatusLine,

    // Display state
    pub(super) terminal_dimensions: (u16, u16), // (width, height)

    // Event management
    pub(super) pending_view_events: Vec<ViewEvent>,
}

impl ProductListViewModel {
    /// Create a view model with the given default page size and size options
    pub fn new(default_size: usize, page_size_options: &[usize]) -> Self {
        let mut options = page_size_options.to_vec();
        if !options.contains(&default_size) {
            options.push(default_size);
        }
        options.sort_unstable();
        options.dedup();

        Self {
            page_state: PageState::new(default_size, options),
            records: Vec::new(),
            selected_row: 0,
            edit_form: None,
            status_line: StatusLine::new(),
            terminal_dimensions: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    /// Create a view model configured from a catalog profile
    pub fn from_profile(profile: &CatalogProfile) -> Self {
        let mut view_model = Self::new(profile.page_size(), profile.page_size_options());
        view_model.status_line.set_base_url(profile.base_url());
        view_model
    }

    /// Records currently shown in the table
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn record(&self, id: u64) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn page_state(&self) -> &PageState {
        &self.page_state
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.edit_form.is_some()
    }

    /// Where keyboard input goes
    pub fn focus(&self) -> Focus {
        if self.edit_form.is_some() {
            Focus::EditModal
        } else {
            Focus::Table
        }
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_line.set_status_message(message);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    pub fn clear_status_message(&mut self) {
        self.status_line.clear_status_message();
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    /// Store the profile name for the status bar
    pub fn set_profile_info(&mut self, profile_name: String) {
        self.status_line.set_profile(profile_name);
    }

    /// Left side of the status bar
    pub fn status_text(&self) -> String {
        self.status_line.left_text(self.is_loading())
    }

    /// Update terminal size
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_dimensions = (width, height);
        tracing::debug!("Terminal size updated to {}x{}", width, height);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_dimensions
    }

    /// Queue a view event for the renderer
    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        if !self.pending_view_events.contains(&event) {
            self.pending_view_events.push(event);
        }
        tracing::trace!("View event emitted: {:?}", event);
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

impl Default for ProductListViewModel {
    fn default() -> Self {
        Self::from_profile(&CatalogProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_view_model_should_start_empty_on_first_page() {
        let view_model = ProductListViewModel::default();
        assert!(view_model.records().is_empty());
        assert_eq!(view_model.page_state().requested().page, 1);
        assert_eq!(view_model.page_state().requested().size, 5);
        assert_eq!(view_model.page_state().total(), 0);
        assert_eq!(view_model.focus(), Focus::Table);
        assert!(view_model.edit_form().is_none());
    }

    #[test]
    fn default_size_should_be_added_to_options() {
        let view_model = ProductListViewModel::new(15, &[10, 5]);
        assert_eq!(view_model.page_state().page_size_options(), &[5, 10, 15]);
    }

    #[test]
    fn view_events_should_be_deduplicated_and_drained() {
        let mut view_model = ProductListViewModel::default();
        view_model.update_terminal_size(120, 40);
        view_model.update_terminal_size(100, 30);

        assert_eq!(
            view_model.collect_pending_view_events(),
            vec![ViewEvent::FullRedrawRequired]
        );
        assert!(view_model.collect_pending_view_events().is_empty());
        assert_eq!(view_model.terminal_size(), (100, 30));
    }
}
