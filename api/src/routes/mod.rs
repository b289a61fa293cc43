//! Route handlers
//!
//! Handlers are generic over the repository implementations so the same
//! routes serve the in-memory and MySQL back ends.

pub mod auth;
pub mod favorites;
pub mod movies;
pub mod users;

use std::sync::Arc;

use mf_core::repositories::{AccountRepository, CatalogRepository};
use mf_core::services::AccessService;

/// Application state that holds shared services
pub struct AppState<A, C>
where
    A: AccountRepository,
    C: CatalogRepository,
{
    pub access: Arc<AccessService<A, C>>,
}

impl<A, C> AppState<A, C>
where
    A: AccountRepository,
    C: CatalogRepository,
{
    pub fn new(access: AccessService<A, C>) -> Self {
        Self {
            access: Arc::new(access),
        }
    }
}
