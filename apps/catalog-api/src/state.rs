//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::{InMemoryUserRepository, UserService};

/// Shared application state
///
/// Each service owns one in-memory collection for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub products: ProductService<InMemoryProductRepository>,
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            products: ProductService::new(InMemoryProductRepository::new()),
            users: UserService::new(InMemoryUserRepository::new()),
        }
    }
}
