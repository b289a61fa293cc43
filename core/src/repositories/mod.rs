//! Repository interfaces for persistence, with in-memory implementations.

pub mod account;
pub mod catalog;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use catalog::{CatalogRepository, InMemoryCatalogRepository};
