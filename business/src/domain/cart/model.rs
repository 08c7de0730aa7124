use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Price, ProductId};

/// One add-to-cart action: a copy of the product as it was at add-time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: Price,
}

impl CartLine {
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price: product.price.clone(),
        }
    }

    /// Constructor for data already persisted in the store (no validation).
    pub fn from_repository(
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

/// Ordered cart contents. Display order is add order and the same product
/// may appear on several lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns a copy of this cart with `line` appended at the end.
    pub fn with_line(&self, line: CartLine) -> Self {
        let mut lines = self.lines.clone();
        lines.push(line);
        Self { lines }
    }

    /// Returns a copy of this cart without any line matching `id`.
    pub fn without_id(&self, id: &ProductId) -> Self {
        let lines = self
            .lines
            .iter()
            .filter(|line| &line.id != id)
            .cloned()
            .collect();
        Self { lines }
    }
}

/// Lifecycle of the engine-owned cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartState {
    Uninitialized,
    Ready(Cart),
}
