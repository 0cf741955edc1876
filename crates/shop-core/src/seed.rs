//! Fixed seed catalogue
//!
//! The sample data every fresh store is populated with. Orders refer to
//! users and products by name; the store resolves names to ids after the
//! users and products are committed.

/// (name, email) per user; email is the idempotence key
pub const SEED_USERS: &[(&str, &str)] = &[
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
];

/// (name, price) per product; name is the idempotence key
pub const SEED_PRODUCTS: &[(&str, i64)] = &[("Laptop", 1200), ("Phone", 800), ("Headphones", 200)];

/// (user name, product name, quantity) per order
///
/// Inserted as one batch, and only into an empty orders relation.
pub const SEED_ORDERS: &[(&str, &str, i64)] = &[
    ("Alice", "Laptop", 1),
    ("Alice", "Headphones", 2),
    ("Bob", "Phone", 1),
    ("Bob", "Headphones", 3),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_emails_unique() {
        let emails: HashSet<_> = SEED_USERS.iter().map(|(_, email)| *email).collect();
        assert_eq!(emails.len(), SEED_USERS.len());
    }

    #[test]
    fn test_seed_orders_reference_seeded_rows() {
        for (user, product, quantity) in SEED_ORDERS {
            assert!(SEED_USERS.iter().any(|(name, _)| name == user));
            assert!(SEED_PRODUCTS.iter().any(|(name, _)| name == product));
            assert!(*quantity > 0);
        }
    }
}
