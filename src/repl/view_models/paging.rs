//! # Paging
//!
//! Page requests and fetch completion for the product list.

use crate::repl::events::ViewEvent;
use crate::repl::models::{FetchTicket, PageRequest, PagingError};
use crate::repl::services::FetchOutcome;
use crate::repl::view_models::core::ProductListViewModel;

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
    /// Rows and total replaced
    Applied,
    /// Fetch failed; previous rows kept
    Failed,
    /// A newer request was issued meanwhile; outcome ignored
    Stale,
}

impl ProductListViewModel {
    /// Request the first page at the configured default size
    pub fn initialize(&mut self) -> FetchTicket {
        let ticket = self.page_state.first_page();
        tracing::info!("Loading first page with size {}", ticket.request.size);
        self.after_request(ticket)
    }

    /// Move to a page, optionally changing the page size
    ///
    /// The pager reflects the new page immediately; the table keeps its rows
    /// until the fetch for the returned ticket completes.
    pub fn change_page(
        &mut self,
        new_page: usize,
        new_size: Option<usize>,
    ) -> Result<FetchTicket, PagingError> {
        let ticket = self.page_state.request(new_page, new_size)?;
        tracing::debug!(
            "Page change requested: page={} size={} offset={}",
            ticket.request.page,
            ticket.request.size,
            ticket.request.offset()
        );
        Ok(self.after_request(ticket))
    }

    /// Fetch the requested page again
    pub fn reload(&mut self) -> FetchTicket {
        let ticket = self.page_state.reissue();
        self.after_request(ticket)
    }

    /// Request the page after the current one, if there is one
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        let current = self.page_state.requested();
        if current.page >= self.page_state.last_page() {
            return None;
        }
        self.change_page(current.page + 1, None).ok()
    }

    /// Request the page before the current one, if there is one
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let current = self.page_state.requested();
        if current.page <= 1 {
            return None;
        }
        self.change_page(current.page - 1, None).ok()
    }

    /// Switch to the next page size option, keeping the page within range
    pub fn cycle_page_size(&mut self) -> Option<FetchTicket> {
        let size = self.page_state.next_page_size();
        let page = self
            .page_state
            .requested()
            .page
            .min(self.page_state.last_page_for(size));
        self.change_page(page, Some(size)).ok()
    }

    fn after_request(&mut self, ticket: FetchTicket) -> FetchTicket {
        self.emit_view_event(ViewEvent::PagerUpdateRequired);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        ticket
    }

    /// Apply a completed fetch
    ///
    /// Only the outcome for the most recently issued token is applied.
    /// Failures are logged and leave the rows untouched.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) -> FetchDisposition {
        let FetchOutcome { ticket, result } = outcome;

        if !self.page_state.is_current(ticket.token) {
            tracing::debug!(
                "Discarding stale response #{} for page {}",
                ticket.token.value(),
                ticket.request.page
            );
            return FetchDisposition::Stale;
        }

        self.emit_view_event(ViewEvent::PagerUpdateRequired);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);

        match result {
            Ok(mut page) => {
                tracing::debug!(
                    "Received {} products (total {}) for page {}",
                    page.products.len(),
                    page.total,
                    ticket.request.page
                );
                let limit = ticket.request.limit();
                if page.products.len() > limit {
                    tracing::debug!(
                        "Service returned {} products for limit {}, keeping the first {}",
                        page.products.len(),
                        limit,
                        limit
                    );
                    page.products.truncate(limit);
                }
                self.records = page.products;
                self.page_state.confirm(ticket.request, page.total);
                self.selected_row = self
                    .selected_row
                    .min(self.records.len().saturating_sub(1));
                self.status_line.clear_status_message();
                self.emit_view_event(ViewEvent::TableRedrawRequired);
                FetchDisposition::Applied
            }
            Err(e) => {
                tracing::error!("Error fetching products: {e}");
                self.page_state.roll_back();
                self.status_line
                    .set_status_message(format!("Failed to load page {}", ticket.request.page));
                FetchDisposition::Failed
            }
        }
    }

    /// Page and size the pager currently shows
    pub fn requested_page(&self) -> PageRequest {
        self.page_state.requested()
    }

    pub fn total(&self) -> u64 {
        self.page_state.total()
    }

    pub fn is_loading(&self) -> bool {
        self.page_state.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::models::{ProductPage, ProductRecord};
    use crate::repl::services::CatalogError;

    fn product(id: u64) -> ProductRecord {
        ProductRecord {
            id,
            title: format!("Product {id}"),
            category: "misc".to_string(),
            stock: id as u32 % 3,
            price: id as f64 * 1.5,
            rating: 4.0,
            thumbnail: format!("https://img/{id}.png"),
        }
    }

    fn page(ids: std::ops::RangeInclusive<u64>, total: u64) -> ProductPage {
        ProductPage {
            products: ids.map(product).collect(),
            total,
        }
    }

    fn success(ticket: FetchTicket, body: ProductPage) -> FetchOutcome {
        FetchOutcome {
            ticket,
            result: Ok(body),
        }
    }

    fn failure(ticket: FetchTicket) -> FetchOutcome {
        FetchOutcome {
            ticket,
            result: Err(CatalogError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }),
        }
    }

    fn loaded() -> ProductListViewModel {
        let mut vm = ProductListViewModel::default();
        let ticket = vm.initialize();
        vm.apply_fetch_outcome(success(ticket, page(1..=5, 37)));
        vm
    }

    #[test]
    fn initialize_should_request_first_page_of_five() {
        let mut vm = ProductListViewModel::default();
        let ticket = vm.initialize();

        assert_eq!(ticket.request.limit(), 5);
        assert_eq!(ticket.request.offset(), 0);
        assert!(vm.is_loading());
        assert_eq!(vm.status_text(), "Loading...");
    }

    #[test]
    fn oversized_response_should_be_cut_to_page_size() {
        let mut vm = ProductListViewModel::default();
        let ticket = vm.initialize();
        vm.apply_fetch_outcome(success(ticket, page(1..=8, 37)));

        assert_eq!(vm.records().len(), 5);
        assert_eq!(vm.records().last().map(|r| r.id), Some(5));
        assert_eq!(vm.total(), 37);
    }

    #[test]
    fn status_text_should_follow_outstanding_fetch() {
        let mut vm = loaded();
        assert_eq!(vm.status_text(), "default @ https://dummyjson.com");

        let ticket = vm.next_page().unwrap();
        assert_eq!(vm.status_text(), "Loading...");

        vm.apply_fetch_outcome(failure(ticket));
        assert!(!vm.is_loading());
        assert_eq!(vm.status_text(), "Failed to load page 2");

        let ticket = vm.reload();
        assert_eq!(vm.status_text(), "Loading...");
        vm.apply_fetch_outcome(success(ticket, page(1..=5, 37)));
        assert_eq!(vm.status_text(), "default @ https://dummyjson.com");
    }

    #[test]
    fn initial_load_should_show_rows_and_total() {
        let vm = loaded();
        assert_eq!(vm.records().len(), 5);
        assert_eq!(vm.total(), 37);
        assert_eq!(vm.page_state().last_page(), 8);
        assert!(!vm.is_loading());
    }

    #[test]
    fn change_page_should_compute_offset() {
        let mut vm = loaded();

        let ticket = vm.change_page(1, Some(10)).unwrap();
        assert_eq!((ticket.request.limit(), ticket.request.offset()), (10, 0));

        let ticket = vm.change_page(3, Some(10)).unwrap();
        assert_eq!((ticket.request.limit(), ticket.request.offset()), (10, 20));

        let ticket = vm.change_page(2, None).unwrap();
        assert_eq!((ticket.request.limit(), ticket.request.offset()), (10, 10));
    }

    #[test]
    fn change_page_should_move_pager_before_rows_arrive() {
        let mut vm = loaded();
        vm.change_page(2, None).unwrap();

        assert_eq!(vm.requested_page(), PageRequest::new(2, 5));
        assert_eq!(vm.page_state().confirmed(), Some(PageRequest::new(1, 5)));
        assert_eq!(vm.records()[0].id, 1);
    }

    #[test]
    fn change_page_should_reject_invalid_input() {
        let mut vm = loaded();
        assert_eq!(vm.change_page(0, None), Err(PagingError::InvalidPage));
        assert!(vm.change_page(1, Some(3)).is_err());
        assert_eq!(vm.requested_page(), PageRequest::new(1, 5));
    }

    #[test]
    fn failed_fetch_should_keep_rows_and_roll_back_pager() {
        let mut vm = loaded();
        let before = vm.records().to_vec();

        let ticket = vm.change_page(4, None).unwrap();
        let disposition = vm.apply_fetch_outcome(failure(ticket));

        assert_eq!(disposition, FetchDisposition::Failed);
        assert_eq!(vm.records(), before.as_slice());
        assert_eq!(vm.total(), 37);
        assert_eq!(vm.requested_page(), PageRequest::new(1, 5));
        assert_eq!(vm.status_line().status_message(), Some("Failed to load page 4"));
        assert!(!vm.is_loading());
    }

    #[test]
    fn failed_initial_fetch_should_leave_list_empty() {
        let mut vm = ProductListViewModel::default();
        let ticket = vm.initialize();
        vm.apply_fetch_outcome(failure(ticket));

        assert!(vm.records().is_empty());
        assert_eq!(vm.total(), 0);
        assert_eq!(vm.requested_page(), PageRequest::new(1, 5));
    }

    #[test]
    fn stale_response_should_be_discarded() {
        let mut vm = loaded();
        let slow = vm.change_page(1, Some(20)).unwrap();
        let fast = vm.change_page(1, Some(10)).unwrap();

        assert_eq!(
            vm.apply_fetch_outcome(success(fast, page(1..=10, 37))),
            FetchDisposition::Applied
        );
        assert_eq!(
            vm.apply_fetch_outcome(success(slow, page(1..=20, 37))),
            FetchDisposition::Stale
        );

        assert_eq!(vm.records().len(), 10);
        assert_eq!(vm.page_state().confirmed(), Some(PageRequest::new(1, 10)));
    }

    #[test]
    fn last_page_should_request_full_limit() {
        let mut vm = loaded();
        let ticket = vm.change_page(8, None).unwrap();
        assert_eq!((ticket.request.limit(), ticket.request.offset()), (5, 35));

        vm.apply_fetch_outcome(success(ticket, page(36..=37, 37)));
        assert_eq!(vm.records().len(), 2);
        assert!(vm.next_page().is_none());
    }

    #[test]
    fn next_and_previous_should_stay_in_range() {
        let mut vm = loaded();
        assert!(vm.previous_page().is_none());

        let ticket = vm.next_page().unwrap();
        assert_eq!(ticket.request, PageRequest::new(2, 5));

        let ticket = vm.previous_page().unwrap();
        assert_eq!(ticket.request, PageRequest::new(1, 5));
    }

    #[test]
    fn cycle_page_size_should_clamp_page() {
        let mut vm = loaded();
        let ticket = vm.change_page(8, None).unwrap();
        vm.apply_fetch_outcome(success(ticket, page(36..=37, 37)));

        // 37 records at 10 per page gives 4 pages
        let ticket = vm.cycle_page_size().unwrap();
        assert_eq!(ticket.request, PageRequest::new(4, 10));
        assert_eq!(ticket.request.offset(), 30);
    }

    #[test]
    fn selection_should_be_clamped_to_new_rows() {
        let mut vm = loaded();
        vm.select_row(4);

        let ticket = vm.change_page(8, None).unwrap();
        vm.apply_fetch_outcome(success(ticket, page(36..=37, 37)));
        assert_eq!(vm.selected_row(), 1);
    }

    #[test]
    fn reload_should_refetch_requested_page() {
        let mut vm = loaded();
        let ticket = vm.reload();
        assert_eq!(ticket.request, PageRequest::new(1, 5));
        assert!(vm.is_loading());
    }
}
