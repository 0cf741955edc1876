//! Repository layer for the shop relations

pub mod sqlite_repo;

pub use sqlite_repo::ShopRepo;
