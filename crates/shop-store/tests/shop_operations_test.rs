// Integration tests for the query/mutation set over the seeded catalogue

use shop_core::ExErrorKind;
use shop_store::ShopStore;

fn seeded_store() -> ShopStore {
    let mut store = ShopStore::open_in_memory().unwrap();
    store.seed().unwrap();
    store
}

fn user_id(store: &ShopStore, name: &str) -> i64 {
    store.user_by_name(name).unwrap().unwrap().id
}

fn product_id(store: &ShopStore, name: &str) -> i64 {
    store.product_by_name(name).unwrap().unwrap().id
}

#[test]
fn test_listings_follow_insertion_order() {
    let store = seeded_store();

    let users: Vec<(String, String)> = store
        .list_users()
        .unwrap()
        .into_iter()
        .map(|u| (u.name, u.email))
        .collect();
    assert_eq!(
        users,
        vec![
            ("Alice".to_string(), "alice@example.com".to_string()),
            ("Bob".to_string(), "bob@example.com".to_string()),
        ]
    );

    let products: Vec<(String, i64)> = store
        .list_products()
        .unwrap()
        .into_iter()
        .map(|p| (p.name, p.price))
        .collect();
    assert_eq!(
        products,
        vec![
            ("Laptop".to_string(), 1200),
            ("Phone".to_string(), 800),
            ("Headphones".to_string(), 200),
        ]
    );
}

#[test]
fn test_order_joins_match_foreign_keys() {
    let store = seeded_store();
    let users = store.list_users().unwrap();
    let products = store.list_products().unwrap();

    let lines = store.list_orders().unwrap();
    assert_eq!(lines.len(), 4);

    for line in &lines {
        let user = users.iter().find(|u| u.id == line.order.user_id).unwrap();
        let product = products
            .iter()
            .find(|p| p.id == line.order.product_id)
            .unwrap();
        assert_eq!(line.user_name, user.name);
        assert_eq!(line.product_name, product.name);
    }

    let summary: Vec<(&str, i64, &str)> = lines
        .iter()
        .map(|l| (l.user_name.as_str(), l.order.quantity, l.product_name.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Alice", 1, "Laptop"),
            ("Alice", 2, "Headphones"),
            ("Bob", 1, "Phone"),
            ("Bob", 3, "Headphones"),
        ]
    );
}

#[test]
fn test_all_seeded_orders_start_unshipped() {
    let store = seeded_store();

    let unshipped = store.list_unshipped_orders().unwrap();

    assert_eq!(unshipped.len(), 4);
    assert!(unshipped.iter().all(|o| !o.order.status));
    assert_eq!(unshipped[0].user.name, "Alice");
    assert_eq!(unshipped[3].user.name, "Bob");
}

#[test]
fn test_orders_for_user() {
    let store = seeded_store();
    let alice = user_id(&store, "Alice");

    let lines = store.orders_for_user(alice).unwrap();

    let quantities: Vec<i64> = lines.iter().map(|l| l.order.quantity).collect();
    assert_eq!(quantities, vec![1, 2]);
    assert!(lines.iter().all(|l| l.order.user_id == alice));
    assert_eq!(lines[0].product_name, "Laptop");
    assert_eq!(lines[1].product_name, "Headphones");
}

#[test]
fn test_update_price_changes_only_target() {
    let mut store = seeded_store();

    let change = store.update_price("Phone", 850).unwrap();

    assert_eq!(change.name, "Phone");
    assert_eq!(change.old_price, 800);
    assert_eq!(change.new_price, 850);
    assert!(!change.is_noop());

    let prices: Vec<i64> = store
        .list_products()
        .unwrap()
        .into_iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(prices, vec![1200, 850, 200]);
}

#[test]
fn test_update_price_unknown_product_is_not_found() {
    let mut store = seeded_store();
    let before = store.list_products().unwrap();

    let err = store.update_price("Tablet", 99).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("Tablet"));
    assert_eq!(store.list_products().unwrap(), before);
}

#[test]
fn test_add_order_if_absent_inserts_once() {
    let mut store = seeded_store();
    let alice = user_id(&store, "Alice");
    let headphones = product_id(&store, "Headphones");

    // (Alice, Headphones, 2) exists; quantity 1 is a distinct triple
    let added = store.add_order_if_absent(alice, headphones, 1).unwrap();
    let added = added.expect("distinct triple should be inserted");
    assert!(added.matches(alice, headphones, 1));
    assert!(!added.status);
    assert_eq!(store.list_orders().unwrap().len(), 5);

    let again = store.add_order_if_absent(alice, headphones, 1).unwrap();
    assert!(again.is_none());
    assert_eq!(store.list_orders().unwrap().len(), 5);
}

#[test]
fn test_add_order_if_absent_existing_seed_triple_is_noop() {
    let mut store = seeded_store();
    let bob = user_id(&store, "Bob");
    let phone = product_id(&store, "Phone");

    assert!(store.add_order_if_absent(bob, phone, 1).unwrap().is_none());
    assert_eq!(store.list_orders().unwrap().len(), 4);
}

#[test]
fn test_mark_first_order_shipped() {
    let mut store = seeded_store();

    let shipped = store.mark_first_order_shipped().unwrap();
    assert!(shipped.status);

    let lines = store.list_orders().unwrap();
    assert_eq!(lines[0].order.id, shipped.id);
    assert_eq!(lines[0].user_name, "Alice");
    assert_eq!(lines[0].product_name, "Laptop");
    assert!(lines[0].order.status);
    assert!(lines[1..].iter().all(|l| !l.order.status));

    let unshipped = store.list_unshipped_orders().unwrap();
    assert_eq!(unshipped.len(), 3);
    assert!(unshipped.iter().all(|o| o.order.id != shipped.id));
}

#[test]
fn test_mark_first_order_shipped_without_orders_is_not_found() {
    let mut store = ShopStore::open_in_memory().unwrap();

    let err = store.mark_first_order_shipped().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_full_walkthrough_counts() {
    let mut store = seeded_store();
    let alice = user_id(&store, "Alice");
    let headphones = product_id(&store, "Headphones");

    store.update_price("Phone", 850).unwrap();
    store.add_order_if_absent(alice, headphones, 1).unwrap();
    store.mark_first_order_shipped().unwrap();

    let counts: Vec<(String, i64)> = store
        .count_orders_per_user()
        .unwrap()
        .into_iter()
        .map(|c| (c.name, c.order_count))
        .collect();
    assert_eq!(
        counts,
        vec![("Alice".to_string(), 3), ("Bob".to_string(), 2)]
    );
}

#[test]
fn test_count_includes_users_without_orders() {
    let mut store = seeded_store();
    store.insert_user("Carol", "carol@example.com").unwrap();

    let counts = store.count_orders_per_user().unwrap();

    let carol = counts.iter().find(|c| c.name == "Carol").unwrap();
    assert_eq!(carol.order_count, 0);
    assert_eq!(counts.len(), 3);
}

#[test]
fn test_duplicate_email_is_constraint_violation() {
    let mut store = seeded_store();

    let err = store
        .insert_user("Alice Again", "alice@example.com")
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity_id(), Some("a***@example.com"));
    assert_eq!(store.list_users().unwrap().len(), 2);
}

#[test]
fn test_duplicate_product_name_is_accepted() {
    let mut store = seeded_store();

    store.insert_product("Phone", 999).unwrap();

    assert_eq!(store.list_products().unwrap().len(), 4);
    // Name lookups resolve to the earliest row
    assert_eq!(store.product_by_name("Phone").unwrap().unwrap().price, 800);
}

#[test]
fn test_order_with_missing_user_is_constraint_violation() {
    let mut store = seeded_store();
    let laptop = product_id(&store, "Laptop");

    let err = store.insert_order(999, laptop, 1).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(store.list_orders().unwrap().len(), 4);
}

#[test]
fn test_add_order_with_missing_product_is_constraint_violation() {
    let mut store = seeded_store();
    let alice = user_id(&store, "Alice");

    let err = store.add_order_if_absent(alice, 999, 1).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}
