//! Seed system
//!
//! Populates a store with the fixed sample catalogue from
//! `shop_core::seed`. Users and products are keyed individually; orders
//! are inserted as one batch only into an empty orders relation.

pub mod importer;

pub use importer::{seed_all, seed_orders, seed_products, seed_users};

/// Rows inserted by a seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_inserted: usize,
    pub products_inserted: usize,
    pub orders_inserted: usize,
}

impl SeedReport {
    /// True when the pass found everything already present
    pub fn is_noop(&self) -> bool {
        self.users_inserted == 0 && self.products_inserted == 0 && self.orders_inserted == 0
    }
}
