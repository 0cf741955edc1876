//! SQLite repository implementation
//!
//! Row-level reads and writes for users, products and orders. Every
//! function takes a `&Connection`; a `&Transaction` derefs to one, so the
//! same calls serve inside and outside a transaction.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use shop_core::model::{Order, OrderLine, OrderWithUser, Product, User, UserOrderCount};

const ORDER_COLUMNS: &str = "o.id, o.user_id, o.product_id, o.quantity, o.status";

fn user_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        email: row.get(offset + 2)?,
    })
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
    })
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    Ok(Order {
        id: row.get(0)?,
        user_id: row.get(1)?,
        product_id: row.get(2)?,
        quantity: row.get(3)?,
        // Adopted databases may carry NULL where the flag was never written.
        status: row.get::<_, Option<bool>>(4)?.unwrap_or(false),
    })
}

fn order_line_from_row(row: &Row<'_>) -> rusqlite::Result<OrderLine> {
    Ok(OrderLine {
        order: order_from_row(row)?,
        user_name: row.get(5)?,
        product_name: row.get(6)?,
    })
}

/// SQLite repository for the shop relations
pub struct ShopRepo;

impl ShopRepo {
    // ===== Users =====

    /// Insert a user and return it with its assigned id
    pub fn insert_user(conn: &Connection, name: &str, email: &str) -> Result<User> {
        conn.execute(
            "INSERT INTO users (name, email) VALUES (?1, ?2)",
            rusqlite::params![name, email],
        )
        .map_err(from_rusqlite)?;

        Ok(User::new(conn.last_insert_rowid(), name, email))
    }

    /// Get a user by e-mail
    pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        conn.query_row(
            "SELECT id, name, email FROM users WHERE email = ?",
            [email],
            |row| user_from_row(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get the earliest user with the given name
    pub fn get_user_by_name(conn: &Connection, name: &str) -> Result<Option<User>> {
        conn.query_row(
            "SELECT id, name, email FROM users WHERE name = ? ORDER BY id LIMIT 1",
            [name],
            |row| user_from_row(row, 0),
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all users in insertion order
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare("SELECT id, name, email FROM users ORDER BY id")
            .map_err(from_rusqlite)?;

        let users = stmt
            .query_map([], |row| user_from_row(row, 0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(users)
    }

    // ===== Products =====

    /// Insert a product and return it with its assigned id
    pub fn insert_product(conn: &Connection, name: &str, price: i64) -> Result<Product> {
        conn.execute(
            "INSERT INTO products (name, price) VALUES (?1, ?2)",
            rusqlite::params![name, price],
        )
        .map_err(from_rusqlite)?;

        Ok(Product::new(conn.last_insert_rowid(), name, price))
    }

    /// Get the earliest product with the given name
    pub fn get_product_by_name(conn: &Connection, name: &str) -> Result<Option<Product>> {
        conn.query_row(
            "SELECT id, name, price FROM products WHERE name = ? ORDER BY id LIMIT 1",
            [name],
            product_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all products in insertion order
    pub fn list_products(conn: &Connection) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare("SELECT id, name, price FROM products ORDER BY id")
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([], product_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Overwrite a product's price
    ///
    /// Returns the number of rows touched (0 when the id is unknown).
    pub fn set_price(conn: &Connection, product_id: i64, price: i64) -> Result<usize> {
        conn.execute(
            "UPDATE products SET price = ?1 WHERE id = ?2",
            rusqlite::params![price, product_id],
        )
        .map_err(from_rusqlite)
    }

    // ===== Orders =====

    /// Insert an unshipped order and return it with its assigned id
    pub fn insert_order(
        conn: &Connection,
        user_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<Order> {
        conn.execute(
            "INSERT INTO orders (user_id, product_id, quantity, status) VALUES (?1, ?2, ?3, 0)",
            rusqlite::params![user_id, product_id, quantity],
        )
        .map_err(from_rusqlite)?;

        Ok(Order {
            id: conn.last_insert_rowid(),
            user_id,
            product_id,
            quantity,
            status: false,
        })
    }

    /// Get an order by id
    pub fn get_order(conn: &Connection, order_id: i64) -> Result<Option<Order>> {
        conn.query_row(
            &format!("SELECT {} FROM orders o WHERE o.id = ?", ORDER_COLUMNS),
            [order_id],
            order_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get the order with the lowest id
    pub fn first_order(conn: &Connection) -> Result<Option<Order>> {
        conn.query_row(
            &format!("SELECT {} FROM orders o ORDER BY o.id LIMIT 1", ORDER_COLUMNS),
            [],
            order_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get the earliest order matching the exact (user, product, quantity) triple
    pub fn find_order(
        conn: &Connection,
        user_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<Option<Order>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM orders o
                 WHERE o.user_id = ?1 AND o.product_id = ?2 AND o.quantity = ?3
                 ORDER BY o.id LIMIT 1",
                ORDER_COLUMNS
            ),
            rusqlite::params![user_id, product_id, quantity],
            order_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Count all orders
    pub fn count_orders(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM orders", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Set an order's shipped flag
    ///
    /// Returns the number of rows touched (0 when the id is unknown).
    pub fn set_order_status(conn: &Connection, order_id: i64, status: bool) -> Result<usize> {
        conn.execute(
            "UPDATE orders SET status = ?1 WHERE id = ?2",
            rusqlite::params![status, order_id],
        )
        .map_err(from_rusqlite)
    }

    /// List every order joined with its user and product names
    pub fn list_order_lines(conn: &Connection) -> Result<Vec<OrderLine>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {}, u.name, p.name FROM orders o
                 JOIN users u ON u.id = o.user_id
                 JOIN products p ON p.id = o.product_id
                 ORDER BY o.id",
                ORDER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let lines = stmt
            .query_map([], order_line_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(lines)
    }

    /// List one user's orders joined with user and product names
    pub fn order_lines_for_user(conn: &Connection, user_id: i64) -> Result<Vec<OrderLine>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {}, u.name, p.name FROM orders o
                 JOIN users u ON u.id = o.user_id
                 JOIN products p ON p.id = o.product_id
                 WHERE o.user_id = ?
                 ORDER BY o.id",
                ORDER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let lines = stmt
            .query_map([user_id], order_line_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(lines)
    }

    /// List unshipped orders with their owning users
    ///
    /// The inner join drops orders whose user row is missing.
    pub fn list_unshipped_with_users(conn: &Connection) -> Result<Vec<OrderWithUser>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {}, u.id, u.name, u.email FROM orders o
                 JOIN users u ON u.id = o.user_id
                 WHERE o.status = 0 OR o.status IS NULL
                 ORDER BY o.id",
                ORDER_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(OrderWithUser {
                    order: order_from_row(row)?,
                    user: user_from_row(row, 5)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Count orders per user, including users with none
    pub fn order_counts_per_user(conn: &Connection) -> Result<Vec<UserOrderCount>> {
        let mut stmt = conn
            .prepare(
                "SELECT u.id, u.name, COUNT(o.id) FROM users u
                 LEFT JOIN orders o ON o.user_id = u.id
                 GROUP BY u.id
                 ORDER BY u.id",
            )
            .map_err(from_rusqlite)?;

        let counts = stmt
            .query_map([], |row| {
                Ok(UserOrderCount {
                    user_id: row.get(0)?,
                    name: row.get(1)?,
                    order_count: row.get(2)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(counts)
    }
}
