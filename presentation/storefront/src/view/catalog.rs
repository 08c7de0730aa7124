use business::domain::product::model::Product;
use business::domain::product::pricing::parse_price;

use super::money::format_money;

/// A tile on the product list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListItem {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price_label: String,
}

impl From<&Product> for ProductListItem {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.as_key(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price_label: format_money(&parse_price(&product.price)),
        }
    }
}

/// The product detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price_label: String,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.as_key(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price_label: format_money(&parse_price(&product.price)),
        }
    }
}
