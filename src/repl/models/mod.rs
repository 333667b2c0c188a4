//! # Models
//!
//! Plain data owned by the view model: product records, pagination state,
//! the edit form and the status line.

pub mod edit_form;
pub mod page_state;
pub mod product;
pub mod status_line;

pub use edit_form::{EditForm, FieldError, FormErrors, FormField};
pub use page_state::{FetchTicket, PageRequest, PageState, PagingError, RequestToken};
pub use product::{ProductEdit, ProductId, ProductPage, ProductRecord};
pub use status_line::StatusLine;
