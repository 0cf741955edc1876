//! Shop Store - SQLite persistence for users, products and orders
//!
//! Provides:
//! - Connection setup (foreign keys, WAL)
//! - Embedded schema migrations with checksums
//! - Row-level repository queries and joins
//! - Idempotent seeding of the sample catalogue
//! - `ShopStore`, the handle every operation goes through

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use seed::SeedReport;
pub use store::ShopStore;
