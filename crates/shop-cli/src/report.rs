//! Plain-text report rendering
//!
//! Each writer prints a heading (where the section has one) followed by
//! one line per record. Callers own the blank lines between sections.

use shop_core::model::{Order, OrderLine, OrderWithUser, PriceChange, Product, User, UserOrderCount};
use std::io::{self, Write};

pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> io::Result<()> {
    writeln!(out, "All Users:")?;
    for user in users {
        writeln!(out, "{} {} {}", user.id, user.name, user.email)?;
    }
    Ok(())
}

pub fn write_products<W: Write>(out: &mut W, products: &[Product]) -> io::Result<()> {
    writeln!(out, "All Products:")?;
    for product in products {
        writeln!(out, "{} {}", product.name, product.price)?;
    }
    Ok(())
}

pub fn write_orders<W: Write>(out: &mut W, lines: &[OrderLine]) -> io::Result<()> {
    writeln!(out, "All Orders:")?;
    for line in lines {
        writeln!(
            out,
            "{} ordered {} {}",
            line.user_name, line.order.quantity, line.product_name
        )?;
    }
    Ok(())
}

pub fn write_unshipped<W: Write>(out: &mut W, orders: &[OrderWithUser]) -> io::Result<()> {
    writeln!(out, "Unshipped Orders:")?;
    for entry in orders {
        writeln!(out, "{} {}", entry.order.id, entry.user.name)?;
    }
    Ok(())
}

/// One user's orders, without a heading
pub fn write_user_orders<W: Write>(out: &mut W, lines: &[OrderLine]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{} x {}", line.order.quantity, line.product_name)?;
    }
    Ok(())
}

pub fn write_price_change<W: Write>(out: &mut W, change: &PriceChange) -> io::Result<()> {
    writeln!(out, "Old {} Price: {}", change.name, change.old_price)?;
    writeln!(out, "New {} Price: {}", change.name, change.new_price)
}

pub fn write_shipped<W: Write>(out: &mut W, order: &Order) -> io::Result<()> {
    writeln!(out, "Order {} shipped status: {}", order.id, order.status)
}

pub fn write_order_counts<W: Write>(out: &mut W, counts: &[UserOrderCount]) -> io::Result<()> {
    writeln!(out, "Updated Order Count Per User:")?;
    for count in counts {
        writeln!(out, "{} {}", count.name, count.order_count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_sections_print_heading_only() {
        assert_eq!(render(|o| write_users(o, &[])), "All Users:\n");
        assert_eq!(render(|o| write_user_orders(o, &[])), "");
        assert_eq!(
            render(|o| write_order_counts(o, &[])),
            "Updated Order Count Per User:\n"
        );
    }

    #[test]
    fn test_order_line_format() {
        let line = OrderLine {
            order: Order {
                id: 7,
                user_id: 1,
                product_id: 3,
                quantity: 2,
                status: false,
            },
            user_name: "Alice".to_string(),
            product_name: "Headphones".to_string(),
        };

        assert_eq!(
            render(|o| write_orders(o, std::slice::from_ref(&line))),
            "All Orders:\nAlice ordered 2 Headphones\n"
        );
        assert_eq!(
            render(|o| write_user_orders(o, &[line])),
            "2 x Headphones\n"
        );
    }

    #[test]
    fn test_price_change_and_shipped_status() {
        let change = PriceChange {
            product_id: 2,
            name: "Phone".to_string(),
            old_price: 800,
            new_price: 850,
        };
        assert_eq!(
            render(|o| write_price_change(o, &change)),
            "Old Phone Price: 800\nNew Phone Price: 850\n"
        );

        let order = Order {
            id: 1,
            user_id: 1,
            product_id: 1,
            quantity: 1,
            status: true,
        };
        assert_eq!(
            render(|o| write_shipped(o, &order)),
            "Order 1 shipped status: true\n"
        );
    }

    #[test]
    fn test_user_and_count_lines() {
        let users = [User::new(1, "Alice", "alice@example.com")];
        assert_eq!(
            render(|o| write_users(o, &users)),
            "All Users:\n1 Alice alice@example.com\n"
        );

        let counts = [UserOrderCount {
            user_id: 1,
            name: "Alice".to_string(),
            order_count: 3,
        }];
        assert_eq!(
            render(|o| write_order_counts(o, &counts)),
            "Updated Order Count Per User:\nAlice 3\n"
        );
    }
}
