//! # Product Model
//!
//! Product records as served by the catalog service, and the page envelope
//! they arrive in.

use serde::{Deserialize, Serialize};

/// Stable identifier of a product in the catalog
pub type ProductId = u64;

/// One product entity as returned by the catalog service
///
/// The view only ever holds a transient copy; the service stays the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub stock: u32,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
}

impl ProductRecord {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Replace the editable fields, leaving identity and catalog metadata untouched
    pub fn apply_edit(&mut self, edit: &ProductEdit) {
        self.title = edit.title.clone();
        self.price = edit.price;
        self.stock = edit.stock;
    }
}

/// Validated values from the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub stock: u32,
}

/// Body of a successful `GET /products` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<ProductRecord>,
    pub total: u64,
}
