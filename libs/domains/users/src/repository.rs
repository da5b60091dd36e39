use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> UserResult<Vec<User>>;

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>>;

    /// Validate and store a new user
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Validate and apply the present fields of `input`
    async fn update(&self, id: &str, input: UpdateUser) -> UserResult<User>;

    async fn delete(&self, id: &str) -> UserResult<()>;
}
