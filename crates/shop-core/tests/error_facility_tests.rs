use shop_core::errors::{ExError, ExErrorKind, ShopError};

#[test]
fn test_product_not_found_verifiable_by_kind() {
    let err = ShopError::ProductNotFound {
        name: "Tablet".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("Tablet"));
}

#[test]
fn test_no_orders_is_not_found() {
    let ex_err: ExError = ShopError::NoOrders.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert!(ex_err.entity_id().is_none());
    assert_eq!(ex_err.message(), "No orders exist");
}

#[test]
fn test_user_not_found_carries_key() {
    let ex_err: ExError = ShopError::UserNotFound {
        key: "Carol".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("Carol"));
}

#[test]
fn test_duplicate_email_is_constraint_violation() {
    let ex_err: ExError = ShopError::DuplicateEmail {
        email: "a***@example.com".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(ex_err.code(), "ERR_CONSTRAINT_VIOLATION");
}

#[test]
fn test_dangling_reference_is_constraint_violation() {
    let ex_err: ExError = ShopError::DanglingOrderReference {
        user_id: 99,
        product_id: 1,
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(ex_err.entity_id(), Some("user:99/product:1"));
}

#[test]
fn test_not_found_distinct_from_constraint_violation() {
    assert_ne!(
        ExErrorKind::NotFound.code(),
        ExErrorKind::ConstraintViolation.code()
    );
}

#[test]
fn test_shop_error_display() {
    let err = ShopError::ProductNotFound {
        name: "Tablet".to_string(),
    };
    assert_eq!(err.to_string(), "Product not found: Tablet");
}
