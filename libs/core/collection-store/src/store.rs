//! The collection store.

use tokio::sync::RwLock;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{StoreError, StoreResult};
use crate::id;
use crate::record::Record;
use crate::violation::Violations;

/// Ordered in-memory collection of records of one schema.
///
/// Reads share the lock; `create`, `update` and `delete` each hold the write
/// lock for the whole operation, so every mutation is one atomic step over
/// the sequence. Construct one per collection at startup and share it behind
/// an `Arc`.
pub struct CollectionStore<R: Record> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> CollectionStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    /// Exact-match lookup, `None` when the id is unknown.
    pub async fn find(&self, id: &str) -> Option<R> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn get(&self, id: &str) -> StoreResult<R> {
        self.find(id)
            .await
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    /// Validate `input` with every required field mandatory, then append a
    /// new record under a fresh identifier.
    #[instrument(skip_all, fields(kind = R::KIND))]
    pub async fn create(&self, input: R::Create) -> StoreResult<R> {
        check::<R, _>(&input)?;

        let mut records = self.records.write().await;
        let id = id::generate_unique(|candidate| records.iter().any(|r| r.id() == candidate));
        let record = R::from_create(id, input)?;
        records.push(record.clone());

        info!(id = %record.id(), "{} created", R::KIND);
        Ok(record)
    }

    /// Apply the fields present in `patch` to the record with `id`.
    ///
    /// The record is left untouched unless every present field is valid.
    #[instrument(skip(self, patch), fields(kind = R::KIND))]
    pub async fn update(&self, id: &str, patch: R::Patch) -> StoreResult<R> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;

        if !R::has_changes(&patch) {
            return Err(StoreError::NothingToUpdate);
        }
        check::<R, _>(&patch)?;

        let mut updated = slot.clone();
        updated.apply_patch(patch)?;
        *slot = updated.clone();

        info!(id = %id, "{} updated", R::KIND);
        Ok(updated)
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        records.remove(position);

        info!(id = %id, "{} deleted", R::KIND);
        Ok(())
    }
}

impl<R: Record> Default for CollectionStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn check<R: Record, P: Validate>(payload: &P) -> StoreResult<()> {
    payload.validate().map_err(|errors| {
        StoreError::Validation(Violations::from_validation_errors(&errors, R::FIELDS))
    })
}
