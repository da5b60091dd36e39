use thiserror::Error;

use crate::violation::Violations;

/// Outcomes a store operation can fail with.
///
/// `NotFound`, `Validation` and `NothingToUpdate` are expected results of a
/// client request. `Corrupted` means a record could not be built from a payload
/// that had already passed validation, which is a defect.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Nothing to update")]
    NothingToUpdate,

    #[error("Corrupted record state: {0}")]
    Corrupted(String),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn corrupted(field: &str, reason: &str) -> Self {
        Self::Corrupted(format!("field '{field}' {reason} after validation"))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
