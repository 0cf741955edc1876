//! Shop Core - domain model, error facility and logging facility
//!
//! This crate provides the foundational pieces shared by the store and the
//! command-line front end:
//! - User, Product and Order records plus the joined read views
//! - The fixed seed catalogue
//! - The structured error facility (`ExError`, `ExErrorKind`, `ShopError`)
//! - The structured logging facility (`log_op_start!` and friends)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod seed;

// The logging macros expand to paths under these re-exports, so callers
// need no direct dependency on tracing or shop-core-types.
pub use shop_core_types;
pub use tracing;

pub use errors::{ExError, ExErrorKind, Result, ShopError};
pub use model::{Order, OrderLine, OrderWithUser, PriceChange, Product, User, UserOrderCount};
