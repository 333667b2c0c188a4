//! # View Events
//!
//! Events related to view updates.
//! These events drive UI refreshing after the view model changes.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (most expensive - terminal resize, modal closed)
    FullRedrawRequired,

    /// Table rows changed (new page, edited record, selection moved)
    TableRedrawRequired,

    /// Pager line changed (requested page, size or total)
    PagerUpdateRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,

    /// Modal contents changed (typing, focus, validation messages)
    ModalRedrawRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_event_full_redraw_should_create() {
        let event = ViewEvent::FullRedrawRequired;
        assert_eq!(event, ViewEvent::FullRedrawRequired);
        assert_ne!(event, ViewEvent::TableRedrawRequired);
    }
}
