use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Validation belongs to the implementation: `create` and `update` reject
/// invalid payloads with a validation error and leave the collection as it was.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Apply the fields present in `input`
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: &str) -> ProductResult<()>;
}
