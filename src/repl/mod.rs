//! # Product Screen
//!
//! Models, view model, views, commands and the controller of the product
//! list screen, plus the catalog service it reads from.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
pub use controllers::AppController;
pub use events::{Focus, Step, ViewEvent};
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use models::{
    EditForm, FormField, PageRequest, PageState, PagingError, ProductEdit, ProductPage,
    ProductRecord,
};
pub use services::{CatalogClient, CatalogError, CatalogService, FetchOutcome};
pub use view_models::{EditError, FetchDisposition, ProductListViewModel};
pub use views::{TerminalRenderer, ViewRenderer};
