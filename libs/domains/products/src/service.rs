//! Product Service - Business logic layer

use collection_store::{Record, StoreError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing catalogue operations over a repository
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(Product::KIND, id).into())
    }

    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Apply a partial update; absent fields keep their values
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await
    }

    /// Create every product of `catalogue` through the regular create path.
    ///
    /// Stops at the first failure.
    #[instrument(skip_all, fields(count = catalogue.len()))]
    pub async fn seed(&self, catalogue: Vec<CreateProduct>) -> ProductResult<usize> {
        let mut created = 0;
        for input in catalogue {
            self.repository.create(input).await?;
            created += 1;
        }
        info!("Seeded {} products", created);
        Ok(created)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use collection_store::{Violation, Violations};

    fn sample_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Каркассон".to_string(),
            category: "Стратегия".to_string(),
            description: "Тайлы и мипплы".to_string(),
            price: 1890.0,
            stock: 22,
            rating: Some(4.6),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|id| Ok(Some(sample_product(id))));

        let service = ProductService::new(mock_repo);
        let product = service.get_product("abc123").await.unwrap();

        assert_eq!(product.id, "abc123");
        assert_eq!(product.name, "Каркассон");
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product("nope00").await.unwrap_err();

        match err {
            ProductError::Store(StoreError::NotFound { kind, id }) => {
                assert_eq!(kind, "Product");
                assert_eq!(id, "nope00");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_product_passes_validation_error_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().times(1).returning(|_| {
            Err(StoreError::Validation(Violations::from(vec![Violation::new(
                "name",
                "required string",
            )]))
            .into())
        });

        let service = ProductService::new(mock_repo);
        let err = service
            .create_product(CreateProduct::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProductError::Store(StoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_products_keeps_repository_order() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![sample_product("first1"), sample_product("secnd2")]));

        let service = ProductService::new(mock_repo);
        let ids: Vec<String> = service
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec!["first1", "secnd2"]);
    }

    #[tokio::test]
    async fn test_seed_creates_each_entry() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(3)
            .returning(|_| Ok(sample_product("seed01")));

        let service = ProductService::new(mock_repo);
        let created = service
            .seed(vec![CreateProduct::default(); 3])
            .await
            .unwrap();

        assert_eq!(created, 3);
    }

    #[tokio::test]
    async fn test_seed_stops_at_first_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(ProductError::from(StoreError::corrupted("price", "is not a number"))));

        let service = ProductService::new(mock_repo);
        let result = service.seed(vec![CreateProduct::default(); 2]).await;

        assert!(result.is_err());
    }
}
