//! Database models shared across the catalog repository.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
