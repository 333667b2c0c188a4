//! # Views Module
//!
//! Terminal rendering of the product screen.

pub mod ansi_escape_codes;
pub mod columns;
pub mod terminal_renderer;

pub use columns::{availability_label, format_price, Column};
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
