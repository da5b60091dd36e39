use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use collection_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Store(StoreError::NotFound { id, .. }) => {
                AppError::NotFound(format!("User {} not found", id))
            }
            UserError::Store(StoreError::Validation(violations)) => {
                match serde_json::to_value(&violations) {
                    Ok(details) => AppError::Validation(details),
                    Err(e) => AppError::SerdeJson(e),
                }
            }
            UserError::Store(StoreError::NothingToUpdate) => {
                AppError::BadRequest("Nothing to update".to_string())
            }
            UserError::Store(err @ StoreError::Corrupted(_)) => {
                AppError::InternalServerError(err.to_string())
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
