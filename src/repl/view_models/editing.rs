//! # Edit Session
//!
//! Opening, typing into, submitting and cancelling the product edit modal.
//! Edits only ever touch the in-memory copy; nothing is written back to the
//! catalog service.

use crate::repl::events::{Step, ViewEvent};
use crate::repl::models::{EditForm, FormErrors, FormField, ProductEdit, ProductId};
use crate::repl::view_models::core::ProductListViewModel;
use thiserror::Error;

/// Why a submit did not apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no product is open for editing")]
    NotEditing,
    #[error("{0}")]
    Invalid(FormErrors),
}

impl ProductListViewModel {
    /// Open the modal for the record with this identifier
    pub fn open_edit(&mut self, record_id: ProductId) -> bool {
        let Some(record) = self.record(record_id) else {
            tracing::debug!("No product with id {} on this page", record_id);
            return false;
        };

        let form = EditForm::from_record(record);
        tracing::debug!("Opening edit modal for product {}", record_id);
        self.edit_form = Some(form);
        self.emit_view_event(ViewEvent::ModalRedrawRequired);
        true
    }

    /// Open the modal for the selected row
    pub fn open_selected(&mut self) -> bool {
        match self.selected_record().map(|r| r.id) {
            Some(id) => self.open_edit(id),
            None => false,
        }
    }

    /// Close the modal and discard any unsaved input
    pub fn cancel_edit(&mut self) {
        if let Some(form) = self.edit_form.take() {
            tracing::debug!("Edit of product {} cancelled", form.record_id());
            self.emit_view_event(ViewEvent::FullRedrawRequired);
        }
    }

    /// Validate the form and patch the matching record
    ///
    /// On validation failure the modal stays open with inline messages and
    /// no record changes.
    pub fn submit_edit(&mut self) -> Result<ProductEdit, EditError> {
        let form = self.edit_form.as_mut().ok_or(EditError::NotEditing)?;

        let edit = match form.validate() {
            Ok(edit) => edit,
            Err(errors) => {
                tracing::debug!("Edit rejected: {}", errors);
                self.emit_view_event(ViewEvent::ModalRedrawRequired);
                return Err(EditError::Invalid(errors));
            }
        };

        match self.records.iter_mut().find(|r| r.id == edit.id) {
            Some(record) => record.apply_edit(&edit),
            None => tracing::warn!(
                "Product {} is no longer on this page, edit dropped",
                edit.id
            ),
        }

        self.edit_form = None;
        tracing::debug!("Product {} updated locally", edit.id);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        Ok(edit)
    }

    /// Type a character into the focused field
    pub fn form_insert_char(&mut self, ch: char) -> bool {
        let accepted = self
            .edit_form
            .as_mut()
            .is_some_and(|form| form.insert_char(ch));
        if accepted {
            self.emit_view_event(ViewEvent::ModalRedrawRequired);
        }
        accepted
    }

    /// Delete the last character of the focused field
    pub fn form_backspace(&mut self) -> bool {
        let deleted = self.edit_form.as_mut().is_some_and(|form| form.backspace());
        if deleted {
            self.emit_view_event(ViewEvent::ModalRedrawRequired);
        }
        deleted
    }

    /// Move focus between form fields
    pub fn form_move_focus(&mut self, step: Step) {
        if let Some(form) = self.edit_form.as_mut() {
            match step {
                Step::Forward => form.focus_next(),
                Step::Backward => form.focus_previous(),
            }
            self.emit_view_event(ViewEvent::ModalRedrawRequired);
        }
    }

    /// Replace a field's whole value
    pub fn set_form_value(&mut self, field: FormField, value: &str) {
        if let Some(form) = self.edit_form.as_mut() {
            form.set_value(field, value);
            self.emit_view_event(ViewEvent::ModalRedrawRequired);
        }
    }
}
