//! Shared integration test infrastructure
//!
//! - `catalog` serves generated products over wiremock
//! - `world` drives the real controller with mock terminal streams

pub mod catalog;
pub mod world;

#[allow(unused_imports)]
pub use world::StocklineWorld;
