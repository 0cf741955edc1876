//! Shop Store handle
//!
//! `ShopStore` owns the connection and exposes the full operation set.
//! Every operation:
//! - logs `log_op_start!` at entry
//! - logs `log_op_end!` on success, `log_op_error!` on failure
//! - runs mutations in their own committed transaction

use std::path::Path;
use std::time::Instant;

use rusqlite::Connection;
use shop_core::errors::{ExError, ExErrorKind, ShopError};
use shop_core::model::{Order, OrderLine, OrderWithUser, PriceChange, Product, User, UserOrderCount};
use shop_core::{log_op_end, log_op_error, log_op_start};
use shop_core_types::mask_email;

use crate::errors::{from_rusqlite, Result};
use crate::repo::ShopRepo;
use crate::seed::{self, SeedReport};
use crate::{db, migrations};

/// Close out an operation started with `log_op_start!`
fn finish<T>(op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Like `finish`, but also logs how many rows a listing returned
fn finish_rows<T>(op: &'static str, start: Instant, result: Result<Vec<T>>) -> Result<Vec<T>> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(rows) => {
            log_op_end!(op, duration_ms = duration_ms, rows = rows.len());
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Handle onto a persistent shop database
pub struct ShopStore {
    conn: Connection,
}

impl ShopStore {
    /// Open (or create) the database file at `path` and initialize the schema
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database and initialize the schema
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        let mut store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create the three relations if absent; idempotent
    pub fn initialize(&mut self) -> Result<()> {
        log_op_start!("initialize");
        let start = Instant::now();
        let result = migrations::apply_migrations(&mut self.conn);
        finish("initialize", start, result)
    }

    // ===== Seeding =====

    /// Insert each seed user whose e-mail is not yet registered
    pub fn seed_users(&mut self) -> Result<usize> {
        log_op_start!("seed_users");
        let start = Instant::now();
        let result = self.in_transaction(seed::seed_users);
        finish("seed_users", start, result)
    }

    /// Insert each seed product whose name is not yet present
    pub fn seed_products(&mut self) -> Result<usize> {
        log_op_start!("seed_products");
        let start = Instant::now();
        let result = self.in_transaction(seed::seed_products);
        finish("seed_products", start, result)
    }

    /// Insert the seed orders if the orders relation is empty
    pub fn seed_orders(&mut self) -> Result<usize> {
        log_op_start!("seed_orders");
        let start = Instant::now();
        let result = self.in_transaction(seed::seed_orders);
        finish("seed_orders", start, result)
    }

    /// Seed users and products (one commit), then orders (second commit)
    pub fn seed(&mut self) -> Result<SeedReport> {
        log_op_start!("seed");
        let start = Instant::now();
        let result = seed::seed_all(&mut self.conn);
        if let Ok(report) = &result {
            tracing::info!(
                users_inserted = report.users_inserted,
                products_inserted = report.products_inserted,
                orders_inserted = report.orders_inserted,
                "seed complete"
            );
        }
        finish("seed", start, result)
    }

    // ===== Lookups =====

    /// First user with this e-mail, if any
    pub fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        log_op_start!("user_by_email", email = %mask_email(email));
        let start = Instant::now();
        let result = ShopRepo::get_user_by_email(&self.conn, email);
        finish("user_by_email", start, result)
    }

    /// Earliest user with this name, if any
    pub fn user_by_name(&self, name: &str) -> Result<Option<User>> {
        log_op_start!("user_by_name", user_name = name);
        let start = Instant::now();
        let result = ShopRepo::get_user_by_name(&self.conn, name);
        finish("user_by_name", start, result)
    }

    /// Earliest product with this name, if any
    pub fn product_by_name(&self, name: &str) -> Result<Option<Product>> {
        log_op_start!("product_by_name", product = name);
        let start = Instant::now();
        let result = ShopRepo::get_product_by_name(&self.conn, name);
        finish("product_by_name", start, result)
    }

    // ===== Listings =====

    /// All users in insertion order
    pub fn list_users(&self) -> Result<Vec<User>> {
        log_op_start!("list_users");
        let start = Instant::now();
        let result = ShopRepo::list_users(&self.conn);
        finish_rows("list_users", start, result)
    }

    /// All products in insertion order
    pub fn list_products(&self) -> Result<Vec<Product>> {
        log_op_start!("list_products");
        let start = Instant::now();
        let result = ShopRepo::list_products(&self.conn);
        finish_rows("list_products", start, result)
    }

    /// All orders with their user and product names
    pub fn list_orders(&self) -> Result<Vec<OrderLine>> {
        log_op_start!("list_orders");
        let start = Instant::now();
        let result = ShopRepo::list_order_lines(&self.conn);
        finish_rows("list_orders", start, result)
    }

    /// Orders not yet shipped, with their owning user
    ///
    /// An order whose user row is missing is skipped rather than reported.
    pub fn list_unshipped_orders(&self) -> Result<Vec<OrderWithUser>> {
        log_op_start!("list_unshipped_orders");
        let start = Instant::now();
        let result = ShopRepo::list_unshipped_with_users(&self.conn);
        finish_rows("list_unshipped_orders", start, result)
    }

    /// Orders belonging to one user, with product names
    pub fn orders_for_user(&self, user_id: i64) -> Result<Vec<OrderLine>> {
        log_op_start!("orders_for_user", user_id = user_id);
        let start = Instant::now();
        let result = ShopRepo::order_lines_for_user(&self.conn, user_id);
        finish_rows("orders_for_user", start, result)
    }

    /// Order count for every user, zero included
    pub fn count_orders_per_user(&self) -> Result<Vec<UserOrderCount>> {
        log_op_start!("count_orders_per_user");
        let start = Instant::now();
        let result = ShopRepo::order_counts_per_user(&self.conn);
        finish_rows("count_orders_per_user", start, result)
    }

    // ===== Mutations =====

    /// Register a user outside the seed path
    ///
    /// # Errors
    ///
    /// `ConstraintViolation` when the e-mail is already registered.
    pub fn insert_user(&mut self, name: &str, email: &str) -> Result<User> {
        log_op_start!("insert_user", email = %mask_email(email));
        let start = Instant::now();
        let result = self
            .in_transaction(|tx| ShopRepo::insert_user(tx, name, email))
            .map_err(|e| match e.kind() {
                ExErrorKind::ConstraintViolation => ExError::from(ShopError::DuplicateEmail {
                    email: mask_email(email),
                })
                .with_op("insert_user")
                .with_source(e),
                _ => e,
            });
        finish("insert_user", start, result)
    }

    /// Add a product outside the seed path; names need not be unique
    pub fn insert_product(&mut self, name: &str, price: i64) -> Result<Product> {
        log_op_start!("insert_product", product = name, price = price);
        let start = Instant::now();
        let result = self.in_transaction(|tx| ShopRepo::insert_product(tx, name, price));
        finish("insert_product", start, result)
    }

    /// Insert an order unconditionally
    ///
    /// # Errors
    ///
    /// `ConstraintViolation` when the user or product does not exist.
    pub fn insert_order(&mut self, user_id: i64, product_id: i64, quantity: i64) -> Result<Order> {
        log_op_start!(
            "insert_order",
            user_id = user_id,
            product_id = product_id,
            quantity = quantity
        );
        let start = Instant::now();
        let result = self
            .in_transaction(|tx| ShopRepo::insert_order(tx, user_id, product_id, quantity))
            .map_err(|e| dangling_reference(e, user_id, product_id));
        finish("insert_order", start, result)
    }

    /// Set the price of the earliest product with this name
    ///
    /// # Errors
    ///
    /// `NotFound` when no product has this name; nothing is written.
    pub fn update_price(&mut self, product_name: &str, new_price: i64) -> Result<PriceChange> {
        log_op_start!("update_price", product = product_name, new_price = new_price);
        let start = Instant::now();
        let result = self.in_transaction(|tx| {
            let product = ShopRepo::get_product_by_name(tx, product_name)?.ok_or_else(|| {
                ExError::from(ShopError::ProductNotFound {
                    name: product_name.to_string(),
                })
                .with_op("update_price")
            })?;
            ShopRepo::set_price(tx, product.id, new_price)?;
            Ok(PriceChange {
                product_id: product.id,
                name: product.name,
                old_price: product.price,
                new_price,
            })
        });
        finish("update_price", start, result)
    }

    /// Insert the order unless one with the same (user, product, quantity)
    /// already exists
    ///
    /// Returns the new order, or `None` when the triple was already present.
    pub fn add_order_if_absent(
        &mut self,
        user_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<Option<Order>> {
        log_op_start!(
            "add_order_if_absent",
            user_id = user_id,
            product_id = product_id,
            quantity = quantity
        );
        let start = Instant::now();
        let result = self
            .in_transaction(|tx| {
                if ShopRepo::find_order(tx, user_id, product_id, quantity)?.is_some() {
                    return Ok(None);
                }
                ShopRepo::insert_order(tx, user_id, product_id, quantity).map(Some)
            })
            .map_err(|e| dangling_reference(e, user_id, product_id));
        finish("add_order_if_absent", start, result)
    }

    /// Mark the order with the lowest id as shipped and return it
    ///
    /// # Errors
    ///
    /// `NotFound` when there are no orders.
    pub fn mark_first_order_shipped(&mut self) -> Result<Order> {
        log_op_start!("mark_first_order_shipped");
        let start = Instant::now();
        let result = self.in_transaction(|tx| {
            let mut order = ShopRepo::first_order(tx)?.ok_or_else(|| {
                ExError::from(ShopError::NoOrders).with_op("mark_first_order_shipped")
            })?;
            ShopRepo::set_order_status(tx, order.id, true)?;
            order.status = true;
            Ok(order)
        });
        if let Ok(order) = &result {
            tracing::info!(order_id = order.id, "order shipped");
        }
        finish("mark_first_order_shipped", start, result)
    }

    /// Run `f` inside a transaction, committing only on success
    fn in_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let value = f(&tx)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(value)
    }
}

/// Reclassify a foreign-key failure on an order insert
fn dangling_reference(err: ExError, user_id: i64, product_id: i64) -> ExError {
    match err.kind() {
        ExErrorKind::ConstraintViolation => ExError::from(ShopError::DanglingOrderReference {
            user_id,
            product_id,
        })
        .with_source(err),
        _ => err,
    }
}
