//! Seed command
//!
//! Usage: shop [--db <PATH>] seed

use shop_store::ShopStore;
use std::io::Write;
use std::path::Path;

/// Initialize and seed the database, then report what it holds
pub fn execute(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ShopStore::open(db_path)?;
    let report = store.seed()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Inserted: {} users, {} products, {} orders",
        report.users_inserted, report.products_inserted, report.orders_inserted
    )?;
    writeln!(
        out,
        "Totals: {} users, {} products, {} orders",
        store.list_users()?.len(),
        store.list_products()?.len(),
        store.list_orders()?.len()
    )?;

    Ok(())
}
