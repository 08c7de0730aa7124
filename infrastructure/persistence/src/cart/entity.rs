use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartLine;
use business::domain::product::value_objects::{Price, ProductId};

/// Stored shape of one cart line: the same fields a catalog product has.
///
/// Unknown fields (e.g. `category`) are ignored on read.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
}

impl CartLineEntity {
    pub fn from_domain(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            title: line.title.clone(),
            description: line.description.clone(),
            price: line.price.clone(),
            image: line.image.clone(),
        }
    }

    pub fn into_domain(self) -> CartLine {
        CartLine::from_repository(self.id, self.title, self.description, self.image, self.price)
    }
}
