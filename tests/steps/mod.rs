//! Step definitions, grouped by feature area:
//! - `catalog` - seeding the fake catalog and starting the screen
//! - `pagination` - page and page size navigation
//! - `editing` - the edit modal
//! - `screen` - what the virtual terminal shows

pub mod catalog;
pub mod editing;
pub mod pagination;
pub mod screen;
