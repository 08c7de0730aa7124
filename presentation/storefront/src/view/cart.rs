use bigdecimal::BigDecimal;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::product::pricing::parse_price;

use super::money::format_money;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price_label: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            key: line.id.as_key(),
            title: line.title.clone(),
            description: line.description.clone(),
            image: line.image.clone(),
            price_label: format_money(&parse_price(&line.price)),
        }
    }
}

/// Read-only projection of the cart screen, rebuilt after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_label: String,
}

impl CartView {
    pub fn project(cart: &Cart, total: &BigDecimal) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total_label: format_money(total),
        }
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::project(&Cart::empty(), &BigDecimal::from(0))
    }
}
