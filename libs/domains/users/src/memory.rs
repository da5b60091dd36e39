use async_trait::async_trait;
use collection_store::CollectionStore;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// In-memory user repository backed by a [`CollectionStore`].
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: CollectionStore<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        Ok(self.store.list().await)
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        Ok(self.store.find(id).await)
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        Ok(self.store.create(input).await?)
    }

    async fn update(&self, id: &str, input: UpdateUser) -> UserResult<User> {
        Ok(self.store.update(id, input).await?)
    }

    async fn delete(&self, id: &str) -> UserResult<()> {
        Ok(self.store.delete(id).await?)
    }
}
