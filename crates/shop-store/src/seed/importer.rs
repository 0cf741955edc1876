//! Seed importer
//!
//! Each step checks for existing rows before inserting, so re-running a
//! seed never trips a unique constraint.

use crate::errors::{from_rusqlite, Result};
use crate::repo::ShopRepo;
use crate::seed::SeedReport;
use rusqlite::Connection;
use shop_core::errors::ShopError;
use shop_core::seed::{SEED_ORDERS, SEED_PRODUCTS, SEED_USERS};

/// Insert each seed user whose e-mail is not yet registered
///
/// Returns the number of users inserted
pub fn seed_users(conn: &Connection) -> Result<usize> {
    let mut inserted = 0;
    for (name, email) in SEED_USERS {
        if ShopRepo::get_user_by_email(conn, email)?.is_none() {
            ShopRepo::insert_user(conn, name, email)?;
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Insert each seed product whose name is not yet present
///
/// Returns the number of products inserted
pub fn seed_products(conn: &Connection) -> Result<usize> {
    let mut inserted = 0;
    for (name, price) in SEED_PRODUCTS {
        if ShopRepo::get_product_by_name(conn, name)?.is_none() {
            ShopRepo::insert_product(conn, name, *price)?;
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Insert the seed orders, but only when the orders relation is empty
///
/// One existing order of any kind skips the whole batch. Users and products are resolved by name, so they must
/// already be committed.
///
/// # Errors
///
/// `NotFound` when a referenced seed user or product is missing.
pub fn seed_orders(conn: &Connection) -> Result<usize> {
    if ShopRepo::count_orders(conn)? > 0 {
        return Ok(0);
    }

    for (user_name, product_name, quantity) in SEED_ORDERS {
        let user = ShopRepo::get_user_by_name(conn, user_name)?.ok_or_else(|| {
            ShopError::UserNotFound {
                key: user_name.to_string(),
            }
        })?;
        let product = ShopRepo::get_product_by_name(conn, product_name)?.ok_or_else(|| {
            ShopError::ProductNotFound {
                name: product_name.to_string(),
            }
        })?;
        ShopRepo::insert_order(conn, user.id, product.id, *quantity)?;
    }

    Ok(SEED_ORDERS.len())
}

/// Seed users and products in one transaction, commit, then seed orders
/// in a second transaction
pub fn seed_all(conn: &mut Connection) -> Result<SeedReport> {
    let tx = conn.transaction().map_err(from_rusqlite)?;
    let users_inserted = seed_users(&tx)?;
    let products_inserted = seed_products(&tx)?;
    tx.commit().map_err(from_rusqlite)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let orders_inserted = seed_orders(&tx)?;
    tx.commit().map_err(from_rusqlite)?;

    Ok(SeedReport {
        users_inserted,
        products_inserted,
        orders_inserted,
    })
}
