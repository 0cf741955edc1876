use serde::{Deserialize, Serialize};

use super::user::User;

/// A purchase of one product by one user
///
/// `status` is the shipped flag: `false` until fulfilment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned row id; the lowest id is the earliest order
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Ordered product
    pub product_id: i64,

    /// Number of units
    pub quantity: i64,

    /// Shipped flag
    pub status: bool,
}

impl Order {
    pub fn is_shipped(&self) -> bool {
        self.status
    }

    /// True when this order is the exact (user, product, quantity) triple
    pub fn matches(&self, user_id: i64, product_id: i64, quantity: i64) -> bool {
        self.user_id == user_id && self.product_id == product_id && self.quantity == quantity
    }
}

/// An order joined with the names of its user and product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order: Order,
    pub user_name: String,
    pub product_name: String,
}

/// An order joined with its owning user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWithUser {
    pub order: Order,
    pub user: User,
}

/// Number of orders referencing one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOrderCount {
    pub user_id: i64,
    pub name: String,
    pub order_count: i64,
}
