use crate::domain::product::model::Product;

use super::errors::CatalogError;

/// The product list a presentation holds for one session.
///
/// A failed fetch still produces a snapshot: empty, with `error` set.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub error: Option<CatalogError>,
}

impl CatalogSnapshot {
    pub fn loaded(products: Vec<Product>) -> Self {
        Self {
            products,
            error: None,
        }
    }

    pub fn failed(error: CatalogError) -> Self {
        Self {
            products: Vec::new(),
            error: Some(error),
        }
    }
}
