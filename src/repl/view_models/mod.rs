//! # ViewModel Module
//!
//! The product list view model, split by concern:
//! - `core` - state, construction, view event queue
//! - `paging` - page requests and fetch completion
//! - `editing` - the edit modal
//! - `selection` - the highlighted row

pub mod core;
pub mod editing;
pub mod paging;
pub mod selection;

pub use self::core::ProductListViewModel;
pub use editing::EditError;
pub use paging::FetchDisposition;
