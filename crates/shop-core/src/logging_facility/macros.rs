//! Operation bracketing macros
//!
//! Each store operation emits one `start` event on entry and exactly one
//! `end` or `end_error` event on exit, all tagged with the same `op`.
//! Extra `key = value` fields are passed straight through to `tracing`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use shop_core::log_op_start;
/// log_op_start!("list_users");
/// log_op_start!("update_price", product = "Phone", new_price = 850);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::shop_core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use shop_core::log_op_end;
/// log_op_end!("list_users", duration_ms = 3);
/// log_op_end!("list_users", duration_ms = 3, rows = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::shop_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` may be anything convertible into `ExError`; its kind, stable
/// code and message are attached as fields.
///
/// # Example
///
/// ```
/// # use shop_core::{log_op_error, errors::ShopError};
/// let err = ShopError::ProductNotFound { name: "Tablet".to_string() };
/// log_op_error!("update_price", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::shop_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($($field)*)?
        )
    }};
}
