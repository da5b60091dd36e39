//! Users Domain
//!
//! In-memory user directory with the same handler / service / repository
//! layering as the products domain.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryUserRepository;
pub use models::{CreateUser, UpdateUser, User};
pub use repository::UserRepository;
pub use service::UserService;
