use serde::{Deserialize, Serialize};

/// A catalogue item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned row id
    pub id: i64,

    /// Display name, used as the seeding key
    pub name: String,

    /// Price in whole currency units
    pub price: i64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Outcome of a price update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    pub product_id: i64,
    pub name: String,
    pub old_price: i64,
    pub new_price: i64,
}

impl PriceChange {
    /// True when the update left the price where it was
    pub fn is_noop(&self) -> bool {
        self.old_price == self.new_price
    }
}
