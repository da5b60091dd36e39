//! In-memory repository backed by a [`CollectionStore`].

use async_trait::async_trait;
use collection_store::CollectionStore;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Products kept in process memory for the lifetime of the server.
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: CollectionStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.list().await)
    }

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        Ok(self.store.find(id).await)
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        Ok(self.store.create(input).await?)
    }

    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        Ok(self.store.update(id, input).await?)
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        Ok(self.store.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use collection_store::StoreError;
    use serde_json::{json, Value};

    fn create_input(body: Value) -> CreateProduct {
        serde_json::from_value(body).unwrap()
    }

    fn update_input(body: Value) -> UpdateProduct {
        serde_json::from_value(body).unwrap()
    }

    fn pandemic() -> CreateProduct {
        create_input(json!({
            "name": "  Пандемия ",
            "category": "Кооператив",
            "description": "Команда врачей против эпидемий",
            "price": 2750,
            "stock": 10,
            "rating": 4.9
        }))
    }

    #[tokio::test]
    async fn test_create_trims_and_defaults_image() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(pandemic()).await.unwrap();

        assert_eq!(product.name, "Пандемия");
        assert_eq!(product.rating, Some(4.9));
        assert_eq!(product.image, None);
        assert_eq!(repo.list().await.unwrap(), vec![product]);
    }

    #[tokio::test]
    async fn test_invalid_price_update_leaves_product_unchanged() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(pandemic()).await.unwrap();

        let err = repo
            .update(&product.id, update_input(json!({ "price": -5 })))
            .await
            .unwrap_err();

        match err {
            ProductError::Store(StoreError::Validation(violations)) => {
                assert_eq!(violations.to_string(), "price: non-negative number");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(repo.get_by_id(&product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(pandemic()).await.unwrap();

        repo.delete(&product.id).await.unwrap();
        let second = repo.delete(&product.id).await;

        assert!(matches!(
            second,
            Err(ProductError::Store(StoreError::NotFound { .. }))
        ));
        assert_eq!(repo.get_by_id(&product.id).await.unwrap(), None);
    }
}
