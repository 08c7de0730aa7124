use serde::Deserialize;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{Price, ProductId};

/// One element of the catalog's JSON array.
#[derive(Debug, Deserialize)]
pub struct CatalogProductDto {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    /// Sent by the catalog, not used by the storefront.
    #[serde(default)]
    pub category: Option<String>,
}

impl From<CatalogProductDto> for Product {
    fn from(dto: CatalogProductDto) -> Self {
        Product::from_catalog(dto.id, dto.title, dto.description, dto.image, dto.price)
    }
}
