//! # stockline - Terminal Product Catalog Admin
//!
//! Lists products from a remote catalog service page by page and lets the
//! user correct a product's title, price and stock in a modal form. Edits
//! stay in memory; nothing is written back to the service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │ - Table     │              │ - Paging     │              │ - Record │
//! │ - Pager     │              │ - Editing    │              │ - Page   │
//! │ - Modal     │              │ - Selection  │              │ - Form   │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                   ▲      ▲
//!                          Commands │      │ Fetch outcomes
//!                                   ▼      │
//!                           ┌──────────────┐    tickets    ┌────────────────┐
//!                           │  Controller  │──────────────▶│ CatalogService │
//!                           │ - Event loop │◀──────────────│ (tokio tasks)  │
//!                           └──────────────┘    mpsc       └────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod repl;

pub use repl::*;
