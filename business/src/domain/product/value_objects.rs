use serde::{Deserialize, Serialize};

/// Catalog identifier of a product.
///
/// The catalog sends either a JSON number or a JSON string. The original form
/// is kept so a persisted cart round-trips unchanged, while equality and
/// hashing go through the string form (`1` and `"1"` are the same product).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl ProductId {
    /// Returns the string form used for matching and list keys.
    pub fn as_key(&self) -> String {
        match self {
            ProductId::Number(n) => n.to_string(),
            ProductId::Text(s) => s.clone(),
        }
    }

    /// An id with a blank string form cannot be matched for removal.
    pub fn is_usable(&self) -> bool {
        match self {
            ProductId::Number(_) => true,
            ProductId::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl Eq for ProductId {}

impl std::hash::Hash for ProductId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_key().hash(state);
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Price exactly as the catalog delivered it.
///
/// Kept verbatim; only [`crate::domain::product::pricing::parse_price`]
/// turns it into a decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Price {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Price {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
