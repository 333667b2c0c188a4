//! # Services Layer
//!
//! Services encapsulate access to external resources so that the view
//! model stays free of I/O.

pub mod catalog;

// Re-export service types
pub use catalog::{CatalogClient, CatalogError, CatalogService, FetchOutcome};
