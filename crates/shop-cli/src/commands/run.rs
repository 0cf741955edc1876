//! Run command: the full walkthrough
//!
//! Usage: shop [--db <PATH>] [run]
//!
//! Seeds the store, prints every listing, changes the Phone price, adds an
//! order for Alice if it is missing, ships the earliest order and prints
//! the per-user order counts.

use shop_core::errors::{ExError, ShopError};
use shop_store::ShopStore;
use std::io::Write;
use std::path::Path;

use crate::report;

const FOCUS_USER: &str = "Alice";
const REPRICED_PRODUCT: &str = "Phone";
const REPRICED_TO: i64 = 850;
const EXTRA_ORDER_PRODUCT: &str = "Headphones";
const EXTRA_ORDER_QUANTITY: i64 = 1;

/// Execute the walkthrough against the database at `db_path`
pub fn execute(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ShopStore::open(db_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    walkthrough(&mut store, &mut out)
}

/// Seed `store` and write the walkthrough report to `out`
pub fn walkthrough<W: Write>(
    store: &mut ShopStore,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    store.seed()?;

    report::write_users(out, &store.list_users()?)?;
    writeln!(out)?;
    report::write_products(out, &store.list_products()?)?;
    writeln!(out)?;
    report::write_orders(out, &store.list_orders()?)?;
    writeln!(out)?;
    report::write_unshipped(out, &store.list_unshipped_orders()?)?;
    writeln!(out)?;

    let alice = store.user_by_name(FOCUS_USER)?.ok_or_else(|| {
        ExError::from(ShopError::UserNotFound {
            key: FOCUS_USER.to_string(),
        })
        .with_op("run")
    })?;
    let headphones = store.product_by_name(EXTRA_ORDER_PRODUCT)?.ok_or_else(|| {
        ExError::from(ShopError::ProductNotFound {
            name: EXTRA_ORDER_PRODUCT.to_string(),
        })
        .with_op("run")
    })?;

    writeln!(out, "{}'s Orders:", alice.name)?;
    report::write_user_orders(out, &store.orders_for_user(alice.id)?)?;
    writeln!(out)?;

    let change = store.update_price(REPRICED_PRODUCT, REPRICED_TO)?;
    report::write_price_change(out, &change)?;
    writeln!(out)?;

    store.add_order_if_absent(alice.id, headphones.id, EXTRA_ORDER_QUANTITY)?;
    writeln!(out, "Added new order for {}:", alice.name)?;
    report::write_user_orders(out, &store.orders_for_user(alice.id)?)?;
    writeln!(out)?;

    let shipped = store.mark_first_order_shipped()?;
    report::write_shipped(out, &shipped)?;
    writeln!(out)?;

    report::write_order_counts(out, &store.count_orders_per_user()?)?;

    Ok(())
}
