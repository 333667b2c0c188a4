//! # Page State Model
//!
//! Tracks what the pager asked for and what the table last received.
//!
//! The pager moves as soon as the user asks for a page (`requested`), while
//! the table keeps showing the rows of the last accepted fetch (`confirmed`).
//! Each fetch carries a [`RequestToken`]; only the newest token may update
//! the confirmed state.

use thiserror::Error;

/// Monotonically increasing identifier attached to each fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A 1-based page number and a page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Number of records to request
    pub fn limit(&self) -> usize {
        self.size
    }

    /// Number of records to skip
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.size
    }
}

/// Everything the catalog service needs to perform one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: RequestToken,
    pub request: PageRequest,
}

/// Rejected pagination input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("page size {size} is not one of {options:?}")]
    UnsupportedPageSize { size: usize, options: Vec<usize> },
}

/// Pagination state of the product list
#[derive(Debug, Clone)]
pub struct PageState {
    requested: PageRequest,
    confirmed: Option<PageRequest>,
    total: u64,
    page_size_options: Vec<usize>,
    next_token: u64,
    latest_token: Option<RequestToken>,
}

impl PageState {
    pub fn new(default_size: usize, page_size_options: Vec<usize>) -> Self {
        Self {
            requested: PageRequest::new(1, default_size),
            confirmed: None,
            total: 0,
            page_size_options,
            next_token: 0,
            latest_token: None,
        }
    }

    pub fn requested(&self) -> PageRequest {
        self.requested
    }

    pub fn confirmed(&self) -> Option<PageRequest> {
        self.confirmed
    }

    /// Total record count as last reported by the service
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Whether a fetch has been issued and its answer is still outstanding
    pub fn is_loading(&self) -> bool {
        self.latest_token.is_some()
    }

    /// Last page for a given size; never less than 1
    pub fn last_page_for(&self, size: usize) -> usize {
        if size == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(size as u64) as usize;
        pages.max(1)
    }

    pub fn last_page(&self) -> usize {
        self.last_page_for(self.requested.size)
    }

    /// Record a new request and issue the token that identifies it
    pub fn request(&mut self, page: usize, size: Option<usize>) -> Result<FetchTicket, PagingError> {
        if page == 0 {
            return Err(PagingError::InvalidPage);
        }
        let size = size.unwrap_or(self.requested.size);
        if !self.page_size_options.contains(&size) {
            return Err(PagingError::UnsupportedPageSize {
                size,
                options: self.page_size_options.clone(),
            });
        }

        Ok(self.issue(PageRequest::new(page, size)))
    }

    /// Issue a token for page 1 at the current size
    pub fn first_page(&mut self) -> FetchTicket {
        self.issue(PageRequest::new(1, self.requested.size))
    }

    /// Issue a token for the currently requested page again
    pub fn reissue(&mut self) -> FetchTicket {
        self.issue(self.requested)
    }

    fn issue(&mut self, request: PageRequest) -> FetchTicket {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.requested = request;
        self.latest_token = Some(token);

        FetchTicket { token, request }
    }

    /// Whether an answer for this token may still be applied
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest_token == Some(token)
    }

    /// Accept a successful answer for the current token
    pub fn confirm(&mut self, request: PageRequest, total: u64) {
        self.confirmed = Some(request);
        self.total = total;
        self.latest_token = None;
    }

    /// Give up on the current token, moving the pager back to what the table shows
    pub fn roll_back(&mut self) {
        if let Some(confirmed) = self.confirmed {
            self.requested = confirmed;
        }
        self.latest_token = None;
    }

    /// The option after the current size, wrapping around
    pub fn next_page_size(&self) -> usize {
        let options = &self.page_size_options;
        match options.iter().position(|s| *s == self.requested.size) {
            Some(idx) => options[(idx + 1) % options.len()],
            None => options.first().copied().unwrap_or(self.requested.size),
        }
    }
}
