use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use collection_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Store(StoreError::NotFound { id, .. }) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            ProductError::Store(StoreError::Validation(violations)) => {
                match serde_json::to_value(&violations) {
                    Ok(details) => AppError::Validation(details),
                    Err(e) => AppError::SerdeJson(e),
                }
            }
            ProductError::Store(StoreError::NothingToUpdate) => {
                AppError::BadRequest("Nothing to update".to_string())
            }
            ProductError::Store(err @ StoreError::Corrupted(_)) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
