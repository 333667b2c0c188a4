//! # Events Module
//!
//! Re-exports all event system components organized by category.

pub mod types;
pub mod view_events;

pub use types::{Focus, Step};
pub use view_events::ViewEvent;
