use super::value_objects::{Price, ProductId};

/// A catalog product. Never mutated once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: Price,
}

impl Product {
    /// Constructor for data received from the catalog (no validation).
    pub fn from_catalog(
        id: ProductId,
        title: String,
        description: String,
        image: String,
        price: Price,
    ) -> Self {
        Self {
            id,
            title,
            description,
            image,
            price,
        }
    }
}
