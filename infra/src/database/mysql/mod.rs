//! MySQL repository implementations

mod account_repository_impl;
mod catalog_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use catalog_repository_impl::MySqlCatalogRepository;
